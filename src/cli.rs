use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ShareCount, Threshold};
use crate::format::SecretFormat;

/// Validates that threshold is at least 2
/// A threshold of 1 defeats the purpose of Shamir Secret Sharing
/// (any single share would be able to recover the entire secret)
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

/// Validates that the share count fits the field (1..=255)
fn validate_share_count(s: &str) -> Result<ShareCount, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    ShareCount::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shardkey")]
#[command(about = "Split secrets into 2-of-3 Shamir Secret Shares over GF(256)")]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret into shares
    ///
    /// The secret is read from the argument, from --file, or from stdin
    Split {
        /// Secret text (hex such as 0x1234..., base64 or utf8, see --format)
        secret: Option<String>,

        /// Read the raw secret bytes from a file
        #[arg(short, long, conflicts_with = "secret")]
        file: Option<PathBuf>,

        /// Write the shares to a file, one per line
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input format of the secret text
        #[arg(long, value_enum, default_value_t = SecretFormat::Hex)]
        format: SecretFormat,

        /// Number of shares to create
        #[arg(short, long, default_value = "3", value_parser = validate_share_count)]
        shares: ShareCount,

        /// Threshold: minimum number of shares needed to reconstruct (must be >= 2)
        #[arg(short, long, default_value = "2", value_parser = validate_threshold)]
        threshold: Threshold,
    },
    /// Combine shares to reconstruct the original secret
    ///
    /// Shares are read from the arguments, from --file, or from stdin
    Combine {
        /// At least 2 shares (format: x:base64)
        shares: Vec<String>,

        /// Read shares from a file, one per line
        #[arg(short, long, conflicts_with = "shares")]
        file: Option<PathBuf>,

        /// Write the recovered secret to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format of the recovered secret
        #[arg(long, value_enum, default_value_t = SecretFormat::Hex)]
        format: SecretFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_split_defaults_to_two_of_three_hex() {
        let cli = Cli::try_parse_from(["shardkey", "split", "0x41"]).unwrap();
        let Commands::Split {
            secret,
            format,
            shares,
            threshold,
            ..
        } = cli.command
        else {
            panic!("expected split");
        };
        assert_eq!(secret.as_deref(), Some("0x41"));
        assert_eq!(format, SecretFormat::Hex);
        assert_eq!(*shares, 3);
        assert_eq!(*threshold, 2);
    }

    #[test]
    fn test_split_rejects_threshold_of_one() {
        assert!(Cli::try_parse_from(["shardkey", "split", "0x41", "--threshold", "1"]).is_err());
    }

    #[test]
    fn test_split_rejects_threshold_above_field() {
        let err = Cli::try_parse_from(["shardkey", "split", "0x41", "--threshold", "300"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("threshold must be at most 255"));
    }

    #[test]
    fn test_combine_collects_shares() {
        let cli =
            Cli::try_parse_from(["shardkey", "combine", "1:UQ==", "3:cQ==", "--format", "utf8"])
                .unwrap();
        let Commands::Combine { shares, format, .. } = cli.command else {
            panic!("expected combine");
        };
        assert_eq!(shares, vec!["1:UQ==".to_string(), "3:cQ==".to_string()]);
        assert_eq!(format, SecretFormat::Utf8);
    }
}
