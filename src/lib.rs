// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod table;

pub use config::options::{ErrorPolicy, RunOptions, StatCategory, StatRequest};
pub use error::{ErrorKind, ScrapeError};
pub use table::StatTable;
