// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{Result, eyre};

use pfr_scrape::cli::{self, Args};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    pfr_scrape::logging::init(args.verbose);

    let report = cli::run(&args)?;
    if report.is_success() {
        println!(
            "\n✅ Scraping complete! Data saved in {}/ folder.",
            args.out_dir.display()
        );
        return Ok(());
    }

    eprintln!("\nScraping incomplete:");
    for line in cli::summary_lines(&report) {
        eprintln!("{line}");
    }
    Err(eyre!(
        "{} of {} request(s) did not complete",
        report.outcomes.len() - report.files_written().len(),
        report.outcomes.len()
    ))
}
