// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::config::consts::{BASE_URL, DEFAULT_OUT_DIR, DEFAULT_YEAR};
use crate::config::options::{ErrorPolicy, NetOptions, RunOptions, StatCategory, batch};
use crate::core::HttpSource;
use crate::error::ScrapeError;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunReport, Status};

/// Scrape Pro-Football-Reference season totals into `<out-dir>/<year>/<stat>.csv`.
///
/// With no arguments: 2025, all four categories, into `data/`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pfr_scrape", version, about)]
pub struct Args {
    /// Seasons: comma list and inclusive ranges, e.g. `2023-2025,2019`
    #[arg(short, long, value_name = "LIST", value_parser = parse_years_list)]
    pub years: Option<YearList>,

    /// Stat category (repeatable): passing, rushing, receiving, defense
    #[arg(short, long = "stat", value_name = "STAT")]
    pub stats: Vec<StatCategory>,

    /// Output root; files land in `<DIR>/<year>/`
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Site root to fetch from
    #[arg(long, value_name = "URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Keep scraping the remaining pages after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Sorted, deduplicated seasons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearList(pub Vec<u16>);

impl Args {
    pub fn to_options(&self) -> RunOptions {
        let years = match &self.years {
            Some(YearList(v)) if !v.is_empty() => v.clone(),
            _ => vec![DEFAULT_YEAR],
        };

        // Canonical order regardless of how flags were given.
        let mut stats = if self.stats.is_empty() {
            StatCategory::ALL.to_vec()
        } else {
            self.stats.clone()
        };
        stats.sort_unstable();
        stats.dedup();

        RunOptions {
            requests: batch(&years, &stats),
            out_dir: self.out_dir.clone(),
            base_url: self.base_url.clone(),
            on_error: if self.keep_going { ErrorPolicy::Continue } else { ErrorPolicy::Abort },
            net: NetOptions {
                timeout: self.timeout.map(Duration::from_secs),
                ..NetOptions::default()
            },
        }
    }
}

/// Build the live client and run the batch with console progress.
pub fn run(args: &Args) -> Result<RunReport, ScrapeError> {
    let opts = args.to_options();
    log::info!(
        "{} request(s) → {} (policy {:?})",
        opts.requests.len(),
        opts.out_dir.display(),
        opts.on_error
    );
    let source = HttpSource::new(&opts.net)?;
    let mut progress = ConsoleProgress;
    Ok(runner::run(&opts, &source, Some(&mut progress)))
}

/// One line per request that did not end up on disk.
pub fn summary_lines(report: &RunReport) -> Vec<String> {
    report
        .outcomes
        .iter()
        .filter_map(|o| match &o.status {
            Status::Saved { .. } => None,
            Status::Failed(e) => Some(format!("  {}: failed ({:?}): {}", o.request, e.kind(), e)),
            Status::Skipped => Some(format!("  {}: skipped", o.request)),
        })
        .collect()
}

pub fn parse_years_list(s: &str) -> Result<YearList, String> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some(dash) = part.find('-') {
            let a = parse_year(&part[..dash])?;
            let b = parse_year(&part[dash + 1..])?;
            if a > b { return Err(format!("Invalid range: {}", part)); }
            out.extend(a..=b);
        } else {
            out.push(parse_year(part)?);
        }
    }
    if out.is_empty() { return Err(s!("No years given")); }
    out.sort_unstable();
    out.dedup();
    Ok(YearList(out))
}

fn parse_year(s: &str) -> Result<u16, String> {
    let s = s.trim();
    match s.parse::<u16>() {
        Ok(y) if y > 0 => Ok(y),
        _ => Err(format!("Invalid year: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_list_ranges_and_dedup() {
        assert_eq!(parse_years_list("2025").unwrap(), YearList(vec![2025]));
        assert_eq!(
            parse_years_list("2024-2025, 2019,2024").unwrap(),
            YearList(vec![2019, 2024, 2025])
        );
    }

    #[test]
    fn years_list_rejects_garbage() {
        assert!(parse_years_list("2025-2020").is_err());
        assert!(parse_years_list("abc").is_err());
        assert!(parse_years_list("0").is_err());
        assert!(parse_years_list(" , ").is_err());
    }
}
