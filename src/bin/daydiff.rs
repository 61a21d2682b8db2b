//! Daydiff CLI tool
//!
//! Prints the days (or days and time) between two dates or times.

use clap::Parser;
use std::process;

use daydiff::date::{parse_time, Reference};
use daydiff::diff::diff;
use daydiff::logging::init_cli_logger;

/// Daydiff - Days and time between two dates
#[derive(Parser)]
#[command(name = "daydiff")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Whole days between two dates
    daydiff 2024/01/01 2024/01/10

    # Order doesn't matter; US order and spelled months work too
    daydiff \"Mar 15 2024\" 1/1/2024

    # Missing year defaults to this year, bare times to today
    daydiff 3/15 today
    daydiff 10:00 14:30")]
struct Cli {
    /// First date/time (e.g. "2024-03-15", "3/15/24 10:30", "Mar 15", "10:00", "today")
    time1: String,

    /// Second date/time
    time2: String,

    /// Log which layouts matched (to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    match run(&cli) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// Parse both inputs against a single captured "now" and render the difference
fn run(cli: &Cli) -> anyhow::Result<String> {
    let reference = Reference::now();

    let a = parse_time(&cli.time1, &reference)?;
    let b = parse_time(&cli.time2, &reference)?;

    Ok(diff(&a, &b).to_string())
}
