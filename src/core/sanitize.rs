// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Placeholder for a blank header cell at column `i`.
/// Multi-level headers also carry the level the label came from.
pub fn unnamed_column(i: usize, level: Option<usize>) -> String {
    match level {
        Some(lvl) => format!("Unnamed: {i}_level_{lvl}"),
        None => format!("Unnamed: {i}"),
    }
}
