use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::Parser;
use zeroize::Zeroizing;

use shardkey::cli::{Cli, Commands};
use shardkey::commands::{
    combine_shares, read_secret_file, read_share_file, share_lines, split_secret, write_secret,
    write_shares,
};
use shardkey::domain::SplitConfig;
use shardkey::format::{decode_secret, encode_secret};

/// Next line of input: hidden when stdin is a terminal, plain otherwise.
/// `None` at end of input.
fn next_input_line(interactive: bool) -> Result<Option<Zeroizing<String>>> {
    if interactive {
        return rpassword::read_password()
            .map(|line| Some(Zeroizing::new(line)))
            .context("Failed to read from stdin");
    }

    let mut line = Zeroizing::new(String::new());
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok((read > 0).then_some(line))
}

/// Read trimmed lines from stdin until an empty line, end of input, or `limit`
fn read_stdin_lines(prompt: &str, limit: Option<usize>) -> Result<Vec<Zeroizing<String>>> {
    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        eprintln!("{prompt}");
    }

    let mut lines = Vec::new();
    while limit.is_none_or(|limit| lines.len() < limit) {
        let Some(line) = next_input_line(interactive)? else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        lines.push(Zeroizing::new(trimmed.to_string()));
    }
    Ok(lines)
}

fn read_secret() -> Result<Zeroizing<String>> {
    read_stdin_lines("Enter secret:", Some(1))?
        .pop()
        .context("No secret provided")
}

fn read_shares() -> Result<Vec<Zeroizing<String>>> {
    let shares = read_stdin_lines("Enter shares (one per line, empty line to finish):", None)?;
    if shares.is_empty() {
        bail!("No shares provided");
    }
    Ok(shares)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Split {
            secret,
            file,
            output,
            format,
            shares,
            threshold,
        } => {
            let secret = match (secret.map(Zeroizing::new), file) {
                (_, Some(path)) => read_secret_file(&path)?,
                (Some(text), None) => decode_secret(&text, format)?,
                (None, None) => decode_secret(&read_secret()?, format)?,
            };

            let config = SplitConfig::new(threshold, shares)?;
            let encoded = split_secret(&secret, config)?;

            if let Some(path) = output {
                write_shares(&path, &encoded)?;
                eprintln!(
                    "Generated {} shares, saved to: {}",
                    encoded.len(),
                    path.display()
                );
            } else {
                println!("Generated {} shares:", encoded.len());
                for line in share_lines(&encoded) {
                    println!("{}", line.as_str());
                }
            }
            eprintln!(
                "Store these shares safely: any {} of them recover the secret",
                *config.threshold()
            );
        }
        Commands::Combine {
            shares,
            file,
            output,
            format,
        } => {
            let shares: Vec<Zeroizing<String>> = match file {
                Some(path) => read_share_file(&path)?,
                None if shares.is_empty() => read_shares()?,
                None => shares.into_iter().map(Zeroizing::new).collect(),
            };

            let secret = combine_shares(&shares)?;

            if let Some(path) = output {
                write_secret(&path, &secret, format)?;
                eprintln!("Recovered secret saved to: {}", path.display());
            } else {
                let rendered = encode_secret(&secret, format)
                    .context("Failed to render recovered secret")?;
                println!("Recovered secret:");
                println!("{}", rendered.as_str());
            }
        }
    }

    Ok(())
}

