use anyhow::Context;
use base58id::{Alphabet, BITCOIN_ALPHABET, Codec, FLICKR_ALPHABET, RIPPLE_ALPHABET};
use clap::{Parser, Subcommand};

/// Command line arguments for the `base58id` binary.
///
/// The alphabet and offset can also be supplied through the environment (or a
/// `.env` file), which is how a deployment pins them once for every caller.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "base58id",
    version,
    about = "Encode integer IDs as base58 tokens and decode them back"
)]
pub struct CliArgs {
    /// Alphabet used for tokens.
    ///
    /// One of `bitcoin`, `flickr` or `ripple`, or a literal string of 58
    /// distinct ASCII characters.
    ///
    /// Environment variable: `BASE58ID_ALPHABET`
    #[arg(
        short,
        long,
        global = true,
        env = "BASE58ID_ALPHABET",
        default_value_t = String::from("flickr")
    )]
    pub alphabet: String,

    /// Offset added to every ID before encoding and removed after decoding.
    ///
    /// Must be between 0 and 1,000,000,000. Tokens are only portable between
    /// callers that agree on both the alphabet and the offset.
    ///
    /// Environment variable: `BASE58ID_OFFSET`
    #[arg(
        short,
        long,
        global = true,
        env = "BASE58ID_OFFSET",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub offset: i64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encode IDs into tokens, one per line.
    Encode {
        #[arg(required = true, allow_negative_numbers = true)]
        ids: Vec<i64>,
    },
    /// Decode tokens into IDs, one per line.
    Decode {
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub codec: Codec,
    pub command: Command,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let alphabet = resolve_alphabet(&args.alphabet)?;
        let codec = Codec::with_alphabet(alphabet, args.offset)
            .with_context(|| format!("BASE58ID_OFFSET ({}) is out of range", args.offset))?;

        Ok(Self {
            codec,
            command: args.command,
        })
    }
}

fn resolve_alphabet(name: &str) -> anyhow::Result<Alphabet> {
    match name.to_ascii_lowercase().as_str() {
        "bitcoin" => Ok(BITCOIN_ALPHABET),
        "flickr" => Ok(FLICKR_ALPHABET),
        "ripple" => Ok(RIPPLE_ALPHABET),
        _ => Alphabet::new(name).with_context(|| {
            format!("BASE58ID_ALPHABET `{name}` is neither a known name nor a valid alphabet")
        }),
    }
}
