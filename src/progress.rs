// src/progress.rs
use std::path::Path;

use crate::config::options::StatRequest;
use crate::error::ScrapeError;

/// Progress reporting for a scrape batch.
/// Frontends implement this to surface status to users; every hook defaults to a no-op.
pub trait Progress {
    /// Called at the start with the number of requests in the batch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// About to fetch `url` for `req`.
    fn item_started(&mut self, _req: &StatRequest, _url: &str) {}

    /// `req` was written to `path`.
    fn item_done(&mut self, _req: &StatRequest, _path: &Path) {}

    fn item_failed(&mut self, _req: &StatRequest, _err: &ScrapeError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Plain stdout lines, one per fetch and one per saved file.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_started(&mut self, req: &StatRequest, url: &str) {
        println!("Scraping {} stats for {} from {}", req.category, req.year, url);
    }

    fn item_done(&mut self, req: &StatRequest, path: &Path) {
        println!("Saved {} stats to {}", req.category, path.display());
    }

    fn item_failed(&mut self, req: &StatRequest, err: &ScrapeError) {
        eprintln!("Failed {} stats for {}: {}", req.category, req.year, err);
    }
}
