mod cli;
mod logging;

use std::process;

use alphadec::{decode, encode, encode_millis, encode_now, AlphaDec};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command, DecodeArgs, EncodeArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Encode(args) => run_encode(args),
        Command::Decode(args) => run_decode(args),
    }
}

fn run_encode(args: EncodeArgs) -> Result<()> {
    let ad = match (args.at, args.millis) {
        (Some(at), _) => {
            let instant = DateTime::parse_from_rfc3339(&at)
                .with_context(|| format!("invalid RFC 3339 instant {at:?}"))?
                .with_timezone(&Utc);
            encode(instant)
        }
        (None, Some(millis)) => encode_millis(millis),
        (None, None) => {
            info!("no instant given, encoding current time");
            encode_now()
        }
    }
    .context("failed to encode instant")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ad)?);
    } else {
        print_record(&ad);
    }
    Ok(())
}

fn run_decode(args: DecodeArgs) -> Result<()> {
    let instant = decode(&args.canonical)
        .with_context(|| format!("failed to decode {:?}", args.canonical))?;

    if args.millis {
        println!("{}", instant.timestamp_millis());
    } else {
        println!("{}", instant.to_rfc3339_opts(SecondsFormat::Millis, true));
    }
    Ok(())
}

fn print_record(ad: &AlphaDec) {
    println!("canonical  {}", ad.canonical);
    println!("readable   {}", ad.readable());
    println!("arc        {}", ad.arc_label());
    if let Some((start, end)) = ad.arc_bounds() {
        println!("arc start  {}", start.to_rfc3339_opts(SecondsFormat::Millis, true));
        println!("arc end    {}", end.to_rfc3339_opts(SecondsFormat::Millis, true));
    }
}
