use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use distpair_cli::commands::count::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "distpair")]
#[command(about = "Counts pairs of input points separated by exactly 1234", long_about = None)]
struct Cli {
    /// Input file: a point count followed by that many `x y` integer pairs,
    /// whitespace-delimited.
    input: PathBuf,

    /// Print a single-line JSON report instead of the bare count.
    #[arg(long, conflicts_with = "stats")]
    json: bool,

    /// Print a summary table instead of the bare count.
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "distpair_cli=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            // Usage problems go to stdout with status 1.
            println!("{err}");
            process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let format = if cli.json {
        OutputFormat::Json
    } else if cli.stats {
        OutputFormat::Stats
    } else {
        OutputFormat::Plain
    };

    count::run(&cli.input, format)?;
    Ok(())
}
