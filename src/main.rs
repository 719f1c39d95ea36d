//! Reads robot commands from stdin (or a file) and prints the position on `REPORT`.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use table_robot::{
    EdgePolicy, ErrorPolicy, SessionOptions, SessionOutcome, TableConfig, run_session,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive a toy robot around a table, one command per line")]
struct Args {
    /// File to read commands from. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Number of columns on the table.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Number of rows on the table.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Stop the robot at the south and west edges as well as north and east.
    #[arg(long)]
    clamp_lower: bool,

    /// Log rejected commands and keep reading instead of aborting.
    #[arg(long)]
    keep_going: bool,

    /// Print an empty line before the report.
    #[arg(long)]
    blank_line: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let edge_policy = if args.clamp_lower {
        EdgePolicy::Clamped
    } else {
        EdgePolicy::UpperOnly
    };
    let config = TableConfig::new(args.width, args.height)?.with_edge_policy(edge_policy);
    let options = SessionOptions {
        error_policy: if args.keep_going {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        },
        leading_blank_line: args.blank_line,
    };

    let stdout = io::stdout().lock();
    let outcome = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run_session(config, options, BufReader::new(file), stdout)?
        }
        None => run_session(config, options, io::stdin().lock(), stdout)?,
    };

    if let SessionOutcome::EndOfInput { state } = outcome {
        log::info!("input ended without REPORT, final state {state:?}");
    }

    Ok(())
}
