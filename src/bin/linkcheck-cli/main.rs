use anyhow::{Context, Result};

use std::io::{self, BufRead};

mod args;
mod output;

use args::Cli;
use output::OutputRow;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.storage_config();
    let mut rows: Vec<OutputRow> = Vec::new();

    if cli.stdin {
        let action = cli.parsed_action()?;
        for line in io::stdin().lock().lines() {
            let input = line.context("read stdin")?;
            rows.push(output::make_row(action, &input, &config));
        }
    } else if let Some(cmd) = &cli.cmd {
        let (action, input) = cmd.action_and_input();
        rows.push(output::make_row(action, input, &config));
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    }

    output::write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 négatif, 1 fatal
    if output::any_negative(&rows) {
        std::process::exit(2);
    }
    Ok(())
}

#[cfg(feature = "with-tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "with-tracing"))]
fn init_tracing() {}
