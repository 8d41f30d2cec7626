use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::codec;
use crate::domain::SplitConfig;
use crate::format::{SecretFormat, encode_secret};
use crate::sharing;

/// Split a secret into Shamir Secret Shares encoded as `"<x>:<base64>"` strings
///
/// Returns one encoded share per x-coordinate, in x order.
///
/// # Errors
/// Returns an error if the secret is empty
pub fn split_secret(secret: &[u8], config: SplitConfig) -> Result<Vec<Zeroizing<String>>> {
    let shares = sharing::split(secret, config).context("Failed to split secret")?;

    Ok(shares
        .iter()
        .map(|share| Zeroizing::new(codec::encode_share(share)))
        .collect())
}

/// Combine encoded shares to reconstruct the original secret
///
/// Each entry may carry the `Share N:` label written by `split`.
///
/// # Errors
/// Returns an error if fewer than two shares are given, a share fails to
/// decode, or the decoded shares are inconsistent
pub fn combine_shares<S: AsRef<str>>(share_strings: &[S]) -> Result<Zeroizing<Vec<u8>>> {
    if share_strings.len() < 2 {
        bail!(
            "Insufficient shares: need at least 2, but only {} provided",
            share_strings.len()
        );
    }

    let mut parsed_shares = Vec::with_capacity(share_strings.len());
    for (idx, share_str) in share_strings.iter().enumerate() {
        let share = codec::parse_share_line(share_str.as_ref())
            .with_context(|| format!("Failed to parse share #{}", idx + 1))?;
        parsed_shares.push(share);
    }

    sharing::combine(&parsed_shares).context("Failed to recover secret")
}

/// Labels encoded shares for display: `Share 1: <share>`, `Share 2: ...`
#[must_use]
pub fn share_lines<S: AsRef<str>>(shares: &[S]) -> Vec<Zeroizing<String>> {
    shares
        .iter()
        .enumerate()
        .map(|(idx, share)| {
            Zeroizing::new(format!(
                "{}{}: {}",
                codec::LINE_LABEL,
                idx + 1,
                share.as_ref()
            ))
        })
        .collect()
}

/// Write labelled shares to `path`, one per line
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn write_shares<S: AsRef<str>>(path: &Path, shares: &[S]) -> Result<()> {
    let mut contents = Zeroizing::new(String::new());
    for line in share_lines(shares) {
        contents.push_str(&line);
        contents.push('\n');
    }

    fs::write(path, contents.as_bytes())
        .with_context(|| format!("Failed to write shares to {}", path.display()))?;
    info!(path = %path.display(), count = shares.len(), "wrote shares");
    Ok(())
}

/// Read share strings from a file, one per line
///
/// Blank lines are skipped; labels are left for [`combine_shares`] to strip.
///
/// # Errors
/// Returns an error if the file cannot be read or holds no shares
pub fn read_share_file(path: &Path) -> Result<Vec<Zeroizing<String>>> {
    let contents = Zeroizing::new(
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read shares from {}", path.display()))?,
    );

    let shares: Vec<_> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Zeroizing::new(line.to_string()))
        .collect();

    if shares.is_empty() {
        bail!("No shares found in {}", path.display());
    }
    debug!(path = %path.display(), count = shares.len(), "read share file");
    Ok(shares)
}

/// Read a secret from a file as raw bytes
///
/// # Errors
/// Returns an error if the file cannot be read
pub fn read_secret_file(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let secret = fs::read(path)
        .with_context(|| format!("Failed to read secret from {}", path.display()))?;
    Ok(Zeroizing::new(secret))
}

/// Write a recovered secret to `path`
///
/// Hex is written as a `0x...` text line; base64 and UTF-8 write the raw bytes.
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn write_secret(path: &Path, secret: &[u8], format: SecretFormat) -> Result<()> {
    let result = match format {
        SecretFormat::Hex => {
            let mut line = encode_secret(secret, format)?;
            line.push('\n');
            fs::write(path, line.as_bytes())
        }
        SecretFormat::Base64 | SecretFormat::Utf8 => fs::write(path, secret),
    };
    result.with_context(|| format!("Failed to write secret to {}", path.display()))?;
    info!(path = %path.display(), %format, "wrote recovered secret");
    Ok(())
}
