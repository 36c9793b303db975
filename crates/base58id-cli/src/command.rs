use crate::config::{CliConfig, Command};
use anyhow::Context;
use std::io::Write;

/// Runs the configured command, writing one result per line to `out`.
///
/// Stops at the first ID or token that fails; lines already written stay
/// written.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> anyhow::Result<()> {
    let codec = &config.codec;
    match &config.command {
        Command::Encode { ids } => {
            tracing::debug!(count = ids.len(), "encoding ids");
            for &id in ids {
                let token = codec
                    .encode(id)
                    .with_context(|| format!("failed to encode `{id}`"))?;
                writeln!(out, "{token}")?;
            }
        }
        Command::Decode { tokens } => {
            tracing::debug!(count = tokens.len(), "decoding tokens");
            for token in tokens {
                let id = codec
                    .decode(token)
                    .with_context(|| format!("failed to decode `{token}`"))?;
                writeln!(out, "{id}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
