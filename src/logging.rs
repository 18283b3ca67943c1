// src/logging.rs
// env_logger backend for the `log` facade. Lines look like `[00:00:01.234][INFO] msg`,
// timestamped from process start.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env};
use log::LevelFilter;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// `-v` count → level. Quiet runs only show warnings and errors.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger on stderr. `RUST_LOG` overrides `verbosity`.
/// Safe to call more than once; only the first call installs.
pub fn init(verbosity: u8) {
    start();
    let default = level_for(verbosity).to_string();
    let _ = Builder::from_env(Env::default().default_filter_or(default))
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}
