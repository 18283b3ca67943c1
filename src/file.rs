// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, WriterBuilder};

use crate::config::consts::EXPORT_SEP;
use crate::config::options::StatRequest;
use crate::error::ScrapeError;
use crate::table::StatTable;

/// Write `table` to `<out_dir>/<year>/<stat>.csv`, replacing any previous file.
/// Returns the final path written to.
pub fn save_stats(
    table: &StatTable,
    req: &StatRequest,
    out_dir: &Path,
) -> Result<PathBuf, ScrapeError> {
    ensure_directory(&req.out_dir(out_dir))?;
    let path = req.out_path(out_dir);
    write_table_atomic(&path, table)?;
    log::debug!("{req}: wrote {} rows to {}", table.len(), path.display());
    Ok(path)
}

/// Serialize into a sibling temp file, then rename over `path`.
/// A failed write leaves any previous file untouched.
pub fn write_table_atomic(path: &Path, table: &StatTable) -> Result<(), ScrapeError> {
    let tmp = path.with_extension("csv.tmp");
    let result = fs::File::create(&tmp)
        .map_err(|e| ScrapeError::io(&tmp, e))
        .and_then(|file| write_table(file, table).map_err(|e| ScrapeError::csv(&tmp, e)));

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ScrapeError::io(path, e)
    })
}

/// Header line, then one line per row. No index column; quotes only where needed.
pub fn write_table<W: Write>(w: W, table: &StatTable) -> Result<(), csv::Error> {
    let mut out = WriterBuilder::new().delimiter(EXPORT_SEP).from_writer(w);
    if !table.columns().is_empty() {
        out.write_record(table.columns())?;
    }
    for row in table.records() {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Read a file written by [`save_stats`] back into a table (first line = columns).
pub fn load_stats(path: &Path) -> Result<StatTable, ScrapeError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(EXPORT_SEP)
        .has_headers(true)
        .from_path(path)
        .map_err(|e| ScrapeError::csv(path, e))?;

    let columns: Vec<String> = rdr
        .headers()
        .map_err(|e| ScrapeError::csv(path, e))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| ScrapeError::csv(path, e))?;
        rows.push(rec.iter().map(String::from).collect());
    }
    Ok(StatTable::new(columns, rows))
}

/// Create `dir` and its parents when missing. Existing directories are fine.
pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::NotADirectory { path: dir.to_path_buf() });
    }
    fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))
}
