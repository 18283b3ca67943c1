//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec owns one page family on the
//! site and encodes *where the data lives in the HTML* and *how to shape it*.
//!
//! ## What lives here
//! - URL construction for the page family.
//! - Table selection (which `<table>` on the page is the ground truth).
//! - Normalization into a [`StatTable`](crate::table::StatTable): flat header,
//!   no repeated header rows, contiguous row index.
//! - Schema checks that surface as [`ScrapeError::UnexpectedSchema`](crate::error::ScrapeError).
//!
//! ## What does **not** live here
//! - Writing files (`file`), batching and error policy (`runner`), progress output.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → specs::season_stats::fetch_stats → core::net (GET)
//!                                                  ↘ core::html (first table)
//!                   → file::save_stats
//! ```
//!
//! ## Testing notes
//! Specs take a `PageSource` so they run offline against captured or synthetic HTML.
pub mod season_stats;
