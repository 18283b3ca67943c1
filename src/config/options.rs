// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;

/// One stats page on the site. Order of `ALL` is the batch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatCategory {
    Passing,
    Rushing,
    Receiving,
    Defense,
}

impl StatCategory {
    pub const ALL: [StatCategory; 4] = [
        StatCategory::Passing,
        StatCategory::Rushing,
        StatCategory::Receiving,
        StatCategory::Defense,
    ];

    /// Path segment on the site and stem of the exported file.
    pub fn slug(&self) -> &'static str {
        match self {
            StatCategory::Passing => "passing",
            StatCategory::Rushing => "rushing",
            StatCategory::Receiving => "receiving",
            StatCategory::Defense => "defense",
        }
    }

    /// Column holding the player name; repeated header rows carry its label as a value.
    pub fn player_column(&self) -> &'static str {
        match self {
            StatCategory::Passing
            | StatCategory::Rushing
            | StatCategory::Receiving
            | StatCategory::Defense => PLAYER_COLUMN,
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for StatCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lc = s.trim().to_ascii_lowercase();
        StatCategory::ALL
            .into_iter()
            .find(|c| c.slug() == lc)
            .ok_or_else(|| format!("Unknown stat category: {} (expected passing, rushing, receiving or defense)", s.trim()))
    }
}

/// A single (category, season) page to scrape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatRequest {
    pub category: StatCategory,
    pub year: u16,
}

impl StatRequest {
    pub fn new(category: StatCategory, year: u16) -> Self {
        Self { category, year }
    }

    /// `<base>/years/<year>/<stat>.htm`
    pub fn url(&self, base_url: &str) -> String {
        let year = self.year.to_string();
        join!(base_url.trim_end_matches('/'), YEARS_PREFIX, &year, "/", self.category.slug(), PAGE_EXT)
    }

    /// `<out_dir>/<year>`
    pub fn out_dir(&self, root: &Path) -> PathBuf {
        root.join(self.year.to_string())
    }

    /// `<out_dir>/<year>/<stat>.csv`
    pub fn out_path(&self, root: &Path) -> PathBuf {
        self.out_dir(root).join(join!(self.category.slug(), ".", EXPORT_EXT))
    }
}

impl fmt::Display for StatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.year)
    }
}

/// What the runner does after a request fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first failure; later requests are reported as skipped.
    #[default]
    Abort,
    /// Attempt every request and report each outcome.
    Continue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub requests: Vec<StatRequest>,
    pub out_dir: PathBuf,
    pub base_url: String,
    pub on_error: ErrorPolicy,
    pub net: NetOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            requests: batch(&[DEFAULT_YEAR], &StatCategory::ALL),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            base_url: s!(BASE_URL),
            on_error: ErrorPolicy::Abort,
            net: NetOptions::default(),
        }
    }
}

/// Year-major cross product: every category of the first year, then the next year.
pub fn batch(years: &[u16], categories: &[StatCategory]) -> Vec<StatRequest> {
    years
        .iter()
        .flat_map(|&year| categories.iter().map(move |&c| StatRequest::new(c, year)))
        .collect()
}
