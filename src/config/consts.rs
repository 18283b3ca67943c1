// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.pro-football-reference.com";
pub const YEARS_PREFIX: &str = "/years/";
pub const PAGE_EXT: &str = ".htm";
pub const USER_AGENT: &str = concat!("pfr_scrape/", env!("CARGO_PKG_VERSION"));

// Batch
pub const DEFAULT_YEAR: u16 = 2025;

// Parse
pub const PLAYER_COLUMN: &str = "Player";

// Export
pub const DEFAULT_OUT_DIR: &str = "data";
pub const EXPORT_EXT: &str = "csv";
pub const EXPORT_SEP: u8 = b',';
