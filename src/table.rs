// src/table.rs
//
// StatTable: flat column names + rectangular rows of text cells.
// Built from a RawTable; row positions are the index (0..len, no gaps).

use crate::core::RawTable;
use crate::core::sanitize::unnamed_column;
use crate::error::ScrapeError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Borrowed view of one row, addressable by column name.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    pub index: usize,
    columns: &'a [String],
    cells: &'a [String],
}

impl<'a> Row<'a> {
    /// Cell under `column`. With repeated labels the leftmost column wins.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let ix = self.columns.iter().position(|c| c == column)?;
        self.cells.get(ix).map(String::as_str)
    }

    pub fn cells(&self) -> &'a [String] {
        self.cells
    }

    /// `(column, value)` pairs in column order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(String::as_str))
    }
}

impl StatTable {
    /// Rows are padded with empty cells to `columns.len()` and truncated past it.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, s!());
                r
            })
            .collect();
        Self { columns, rows }
    }

    /// Flatten the header to its leaf level and square up the rows.
    /// The table is as wide as its widest header level or row.
    pub fn from_raw(raw: RawTable) -> Self {
        let width = raw.width();
        let columns = flatten_header(&raw.header, width);
        Self::new(columns, raw.body)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        let cells = self.rows.get(index)?;
        Some(Row { index, columns: &self.columns, cells })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| Row { index, columns: &self.columns, cells })
    }

    /// Raw cell rows, in index order.
    pub fn records(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Fail with `UnexpectedSchema` unless `column` is present.
    pub fn require_column(&self, column: &str) -> Result<usize, ScrapeError> {
        self.column_index(column)
            .ok_or_else(|| ScrapeError::UnexpectedSchema {
                missing: s!(column),
                found: self.columns.clone(),
            })
    }

    /// Remove rows whose `column` cell repeats the column label
    /// (header rows the site re-inserts every few dozen rows).
    /// Remaining rows keep their order and are re-indexed from 0.
    /// Returns how many rows were dropped.
    pub fn drop_repeated_headers(&mut self, column: &str) -> Result<usize, ScrapeError> {
        let ix = self.require_column(column)?;
        let before = self.rows.len();
        self.rows.retain(|r| r[ix] != column);
        Ok(before - self.rows.len())
    }

    /// Remove rows that reproduce a whole header level cell for cell,
    /// e.g. a repeated over-header row whose player cell is blank.
    pub fn drop_header_echoes(&mut self, levels: &[Vec<String>]) -> usize {
        let width = self.columns.len();
        let echoes: Vec<Vec<String>> = levels
            .iter()
            .map(|l| {
                let mut l = l.clone();
                l.resize(width, s!());
                l
            })
            .collect();
        let before = self.rows.len();
        self.rows.retain(|r| !echoes.contains(r));
        before - self.rows.len()
    }
}

/// Leaf-level column names. Deeper headers keep only their last level;
/// blanks get `Unnamed: …` placeholders; no header at all yields `0, 1, …`.
pub fn flatten_header(levels: &[Vec<String>], width: usize) -> Vec<String> {
    let Some(leaf) = levels.last() else {
        return (0..width).map(|i| i.to_string()).collect();
    };
    let level = (levels.len() > 1).then(|| levels.len() - 1);

    (0..width)
        .map(|i| match leaf.get(i) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => unnamed_column(i, level),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flatten_drops_outer_level() {
        let levels = vec![strs(&["Passing", "Passing", "Passing"]), strs(&["Player", "Yds", "TD"])];
        assert_eq!(flatten_header(&levels, 3), strs(&["Player", "Yds", "TD"]));
    }

    #[test]
    fn flatten_fills_blanks_and_width() {
        let single = vec![strs(&["Rk", "", "Player"])];
        assert_eq!(flatten_header(&single, 4), strs(&["Rk", "Unnamed: 1", "Player", "Unnamed: 3"]));

        let multi = vec![strs(&["", "Tackles"]), strs(&["", "Comb"])];
        assert_eq!(flatten_header(&multi, 2), strs(&["Unnamed: 0_level_1", "Comb"]));

        assert_eq!(flatten_header(&[], 2), strs(&["0", "1"]));
    }

    #[test]
    fn rows_are_squared_to_header() {
        let t = StatTable::new(strs(&["Player", "Pos"]), vec![strs(&["A"]), strs(&["B", "RB", "extra"])]);
        assert_eq!(t.records(), &[strs(&["A", ""]), strs(&["B", "RB"])]);
    }

    #[test]
    fn from_raw_widens_to_longest_row() {
        let raw = RawTable {
            header: vec![strs(&["Player"])],
            body: vec![strs(&["A", "QB"])],
        };
        let t = StatTable::from_raw(raw);
        assert_eq!(t.columns(), &strs(&["Player", "Unnamed: 1"]));
        assert_eq!(t.row(0).unwrap().get("Unnamed: 1"), Some("QB"));
    }

    #[test]
    fn drop_repeated_headers_reindexes() {
        let mut t = StatTable::new(
            strs(&["Player", "Pos"]),
            vec![
                strs(&["Player", "Pos"]),
                strs(&["J. Doe", "QB"]),
                strs(&["Player", "Pos"]),
                strs(&["A. Smith", "RB"]),
            ],
        );
        assert_eq!(t.drop_repeated_headers("Player").unwrap(), 2);
        let got: Vec<_> = t.rows().map(|r| (r.index, r.get("Player").unwrap())).collect();
        assert_eq!(got, vec![(0, "J. Doe"), (1, "A. Smith")]);
    }

    #[test]
    fn header_echo_rows_are_dropped() {
        let levels = vec![strs(&["", "Fumbles"]), strs(&["Player", "FF"])];
        let mut t = StatTable::new(
            strs(&["Player", "FF"]),
            vec![strs(&["A", "1"]), strs(&["", "Fumbles"]), strs(&["B", "0"])],
        );
        assert_eq!(t.drop_header_echoes(&levels), 1);
        assert_eq!(t.len(), 2);
        assert_eq!(t.row(1).unwrap().get("Player"), Some("B"));
    }

    #[test]
    fn missing_player_column_is_schema_error() {
        let mut t = StatTable::new(strs(&["Name", "Pos"]), vec![strs(&["A", "QB"])]);
        match t.drop_repeated_headers("Player") {
            Err(ScrapeError::UnexpectedSchema { missing, found }) => {
                assert_eq!(missing, "Player");
                assert_eq!(found, strs(&["Name", "Pos"]));
            }
            other => panic!("expected UnexpectedSchema, got {other:?}"),
        }
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn repeated_label_lookup_is_leftmost() {
        let t = StatTable::new(strs(&["Player", "Yds", "Yds"]), vec![strs(&["A", "10", "20"])]);
        assert_eq!(t.row(0).unwrap().get("Yds"), Some("10"));
        let pairs: Vec<_> = t.row(0).unwrap().pairs().collect();
        assert_eq!(pairs[2], ("Yds", "20"));
    }
}
