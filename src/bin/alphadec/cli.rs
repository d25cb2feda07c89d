use clap::{Parser, Subcommand};

/// AlphaDec hierarchical year labels.
#[derive(Parser)]
#[command(
    name = "alphadec",
    version,
    about = "Encode UTC instants as AlphaDec labels and decode them back"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Encode an instant (defaults to now).
    Encode(EncodeArgs),
    /// Decode a canonical string back to an instant.
    Decode(DecodeArgs),
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// RFC 3339 instant, e.g. 2024-07-02T12:00:00Z. Offsets are normalised to UTC.
    #[arg(long, conflicts_with = "millis")]
    pub at: Option<String>,

    /// Unix timestamp in milliseconds.
    #[arg(long, allow_hyphen_values = true)]
    pub millis: Option<i64>,

    /// Print the full record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Canonical string in YYYY_PaBt_MMMMMM form.
    pub canonical: String,

    /// Print Unix milliseconds instead of RFC 3339.
    #[arg(long)]
    pub millis: bool,
}
