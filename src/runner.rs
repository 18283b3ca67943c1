// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{ErrorPolicy, RunOptions, StatRequest},
    core::PageSource,
    error::ScrapeError,
    file::save_stats,
    progress::Progress,
    specs::season_stats::fetch_stats,
};

/// What happened to one request.
#[derive(Debug)]
pub enum Status {
    Saved { path: PathBuf, rows: usize },
    Failed(ScrapeError),
    /// Not attempted: an earlier request failed under `ErrorPolicy::Abort`.
    Skipped,
}

#[derive(Debug)]
pub struct Outcome {
    pub request: StatRequest,
    pub status: Status,
}

/// Per-request results, in batch order. Every request appears exactly once.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| matches!(o.status, Status::Saved { .. }))
    }

    pub fn files_written(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.status {
                Status::Saved { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&StatRequest, &ScrapeError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            Status::Failed(e) => Some((&o.request, e)),
            _ => None,
        })
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, Status::Skipped))
            .count()
    }
}

/// Fetch + save one request.
pub fn scrape_one(
    opts: &RunOptions,
    source: &dyn PageSource,
    req: &StatRequest,
) -> Result<(PathBuf, usize), ScrapeError> {
    let table = fetch_stats(source, &opts.base_url, req)?;
    let path = save_stats(&table, req, &opts.out_dir)?;
    Ok((path, table.len()))
}

/// Top-level runner: every request in order, fetch then save.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    source: &dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> RunReport {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.requests.len());
    }

    let mut report = RunReport { outcomes: Vec::with_capacity(opts.requests.len()) };
    let mut aborted = false;

    for req in &opts.requests {
        if aborted {
            report.outcomes.push(Outcome { request: *req, status: Status::Skipped });
            continue;
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_started(req, &req.url(&opts.base_url));
        }

        let status = match scrape_one(opts, source, req) {
            Ok((path, rows)) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(req, &path);
                }
                Status::Saved { path, rows }
            }
            Err(e) => {
                log::error!("{req}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(req, &e);
                }
                if opts.on_error == ErrorPolicy::Abort {
                    aborted = true;
                }
                Status::Failed(e)
            }
        };
        report.outcomes.push(Outcome { request: *req, status });
    }

    if aborted {
        let skipped = report.skipped();
        log::warn!("batch aborted; {skipped} request(s) skipped");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Aborted after first failure; {skipped} request(s) skipped"));
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}
