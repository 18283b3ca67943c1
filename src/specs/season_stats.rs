// src/specs/season_stats.rs
//! League-wide season totals: `/years/<year>/<stat>.htm`.
//!
//! Each page carries one stats table. Defense groups columns under an
//! over-header row (`Def Interceptions`, `Fumbles`, `Tackles`, …); the other
//! categories have a single header row. Every page repeats its header row
//! inside `<tbody>` every few dozen players.

use crate::config::options::{StatCategory, StatRequest};
use crate::core::{PageSource, first_table};
use crate::error::ScrapeError;
use crate::table::StatTable;

/// GET the page for `req` and normalize its first table.
pub fn fetch_stats(
    source: &dyn PageSource,
    base_url: &str,
    req: &StatRequest,
) -> Result<StatTable, ScrapeError> {
    let url = req.url(base_url);
    let doc = source.get(&url)?;
    let table = parse_stats(&doc, req.category)?;
    log::info!("{req}: {} rows x {} columns", table.len(), table.columns().len());
    Ok(table)
}

/// Offline half of [`fetch_stats`]: first table → flat header → no repeated headers.
pub fn parse_stats(doc: &str, category: StatCategory) -> Result<StatTable, ScrapeError> {
    let raw = first_table(doc).ok_or(ScrapeError::NoTable)?;
    if raw.header.len() > 1 {
        log::debug!("{category}: flattening {}-level header", raw.header.len());
    }

    let levels = raw.header.clone();
    let mut table = StatTable::from_raw(raw);
    let mut dropped = table.drop_repeated_headers(category.player_column())?;
    dropped += table.drop_header_echoes(&levels);
    if dropped > 0 {
        log::debug!("{category}: dropped {dropped} repeated header rows");
    }
    Ok(table)
}
