use crate::compare::{
    ComparisonResult, build_rows, default_output_path, load_pair, orient, render_summary,
    render_table, write_comparison,
};
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Session summary JSON, conventionally the WITH-plugin run
    #[arg(value_name = "SUMMARY_A")]
    pub summary_a: PathBuf,

    /// Session summary JSON, conventionally the WITHOUT-plugin run
    #[arg(value_name = "SUMMARY_B")]
    pub summary_b: PathBuf,

    /// Where to write the comparison record (default: comparison.json next to SUMMARY_A)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the report without writing the comparison record
    #[arg(long, conflicts_with = "output")]
    pub no_write: bool,
}

/// Parses arguments, exiting with status 1 on usage errors.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    }
}

pub fn run() -> Result<()> {
    let cli = parse_args();
    run_with(&cli)
}

pub fn run_with(cli: &Cli) -> Result<()> {
    let (a, b) = load_pair(&cli.summary_a, &cli.summary_b)?;

    let oriented = orient(a, b);
    println!("{}\n", oriented.orientation.message());

    let rows = build_rows(&oriented.with, &oriented.without);
    print!("{}", render_table(&rows));
    println!();
    print!("{}", render_summary(&oriented.with, &oriented.without));

    if cli.no_write {
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.summary_a));
    let result = ComparisonResult::build(&oriented.with, &oriented.without, Utc::now());
    match write_comparison(&output, &result) {
        Ok(()) => println!("\n{}", t!("compare.written", path = output.display())),
        Err(e) => eprintln!("{}", e.display_localized()),
    }

    Ok(())
}
