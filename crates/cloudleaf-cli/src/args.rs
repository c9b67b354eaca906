use clap::{Parser, Subcommand};
use cloudleaf_core::{config::DEFAULT_SWEEP_INTERVAL, summary::DEFAULT_MODEL};

/// CloudLeaf, a peer-to-peer book lending circle
///
/// Members list their own books, borrow books from each other and keep a
/// shared wishlist that is matched against the marketplace. All data lives
/// in memory and starts from a small sample circle every time. Run without
/// a command for the interactive shell, or `serve` to expose the same
/// operations as MCP tools over stdio.
#[derive(Parser)]
#[command(version, about, name = "cloudleaf")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API key for the Gemini text generation service used for summaries
    #[arg(long, global = true, env = "CLOUDLEAF_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for book summaries
    #[arg(long, global = true, env = "CLOUDLEAF_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Seconds between automatic checks for expired loans
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_SWEEP_INTERVAL.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_secs: u64,

    /// Store passwords as plain text instead of Argon2 hashes
    #[arg(long, global = true)]
    pub plaintext_passwords: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the CloudLeaf CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive shell (default)
    Shell,
    /// Start the MCP server on stdio
    Serve,
}
