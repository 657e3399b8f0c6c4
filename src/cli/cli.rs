use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const PASSFORGE_LONG_VERSION: &str = concat!(
    "version: ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "git sha: ",
    env!("PASSFORGE_GIT_SHA"),
    "\n",
    "build time (UTC): ",
    env!("PASSFORGE_BUILD_TIME"),
    "\n",
    "target: ",
    env!("PASSFORGE_TARGET")
);

#[derive(Parser)]
#[command(
    name = "passforge",
    version = env!("CARGO_PKG_VERSION"),
    long_version = PASSFORGE_LONG_VERSION,
    about = " 🔐 passforge — password generator & hash toolbox"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one or more random secrets
    Gen {
        /// Secret length in characters
        #[arg(long)]
        length: Option<u16>,
        /// Disable lowercase letters
        #[arg(long)]
        no_lower: bool,
        /// Disable uppercase letters
        #[arg(long)]
        no_upper: bool,
        /// Disable digits
        #[arg(long)]
        no_digits: bool,
        /// Disable symbols
        #[arg(long)]
        no_symbols: bool,
        /// Minimum number of letters (default 1 when letters are enabled)
        #[arg(long)]
        min_letters: Option<u16>,
        /// Minimum number of digits (default 1 when digits are enabled)
        #[arg(long)]
        min_digits: Option<u16>,
        /// Minimum number of symbols (default 1 when symbols are enabled)
        #[arg(long)]
        min_symbols: Option<u16>,
        /// Allow ambiguous characters (O/0/l/1)
        #[arg(long)]
        allow_ambiguous: bool,
        /// Number of secrets to generate
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=50))]
        count: u16,
        /// Write the secrets to a file, one per line
        #[arg(long, conflicts_with = "json")]
        out: Option<PathBuf>,
        /// Copy the result to the clipboard; holds the command open until
        /// the previous clipboard contents are restored after the TTL
        #[arg(long)]
        copy: bool,
        /// Clipboard TTL in seconds (overrides PASSFORGE_CLIP_TTL)
        #[arg(long)]
        ttl: Option<u64>,
        /// Output a JSON array of secrets
        #[arg(long)]
        json: bool,
    },
    /// Compute digests of text under an optional salt
    Hash {
        /// Text to digest (leading/trailing whitespace is trimmed)
        text: String,
        /// Salt appended verbatim after the text (no delimiter)
        #[arg(long, default_value = "")]
        salt: String,
        /// Digest algorithm, or all four
        #[arg(long, value_enum, default_value = "all")]
        algo: AlgoArg,
        /// Output JSON rows of {label, hex}
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum AlgoArg {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    All,
}
