// src/core/html.rs
// Table extraction over the html5ever tree.
// Only the first <table> in document order is read; rows of nested tables are skipped.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;

/// Upper bound for colspan/rowspan values taken from the page.
const MAX_SPAN: usize = 1000;

/// A table as it appears on the page: header levels and data rows, spans expanded.
/// Rows may still differ in width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header levels, outermost first.
    pub header: Vec<Vec<String>>,
    /// Data rows in page order (`<tbody>` rows, then `<tfoot>` rows).
    pub body: Vec<Vec<String>>,
}

impl RawTable {
    /// Widest header level or body row.
    pub fn width(&self) -> usize {
        self.header
            .iter()
            .chain(self.body.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Head,
    Body,
    Foot,
}

struct Cell {
    text: String,
    is_header: bool,
    colspan: usize,
    rowspan: usize,
}

/// Parse `doc` and read its first `<table>`. `None` when the page has no table.
pub fn first_table(doc: &str) -> Option<RawTable> {
    let html = Html::parse_document(doc);
    let table = html
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| is(e, "table"))?;
    Some(read_table(table))
}

fn read_table(table: ElementRef<'_>) -> RawTable {
    let mut head: Vec<Vec<Cell>> = Vec::new();
    let mut body: Vec<Vec<Cell>> = Vec::new();
    let mut foot: Vec<Vec<Cell>> = Vec::new();

    for tr in table.descendants().filter_map(ElementRef::wrap).filter(|e| is(e, "tr")) {
        if !belongs_to(tr, table) {
            continue;
        }
        let cells = read_cells(tr);
        if cells.is_empty() {
            continue;
        }
        match section_of(tr) {
            Section::Head => head.push(cells),
            Section::Body => body.push(cells),
            Section::Foot => foot.push(cells),
        }
    }

    // No <thead>: leading rows made only of <th> cells act as the header.
    if head.is_empty() {
        let n = body
            .iter()
            .take_while(|row| row.iter().all(|c| c.is_header))
            .count();
        head = body.drain(..n).collect();
    }
    body.extend(foot);

    RawTable {
        header: expand_spans(head),
        body: expand_spans(body),
    }
}

fn is(el: &ElementRef<'_>, name: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(name)
}

/// True when the closest enclosing `<table>` of `tr` is `table`.
fn belongs_to(tr: ElementRef<'_>, table: ElementRef<'_>) -> bool {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| is(a, "table"))
        .is_some_and(|a| a.id() == table.id())
}

fn section_of(tr: ElementRef<'_>) -> Section {
    match tr.parent().and_then(ElementRef::wrap) {
        Some(p) if is(&p, "thead") => Section::Head,
        Some(p) if is(&p, "tfoot") => Section::Foot,
        _ => Section::Body,
    }
}

fn read_cells(tr: ElementRef<'_>) -> Vec<Cell> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| is(c, "th") || is(c, "td"))
        .map(|c| Cell {
            text: normalize_ws(&c.text().collect::<String>()),
            is_header: is(&c, "th"),
            colspan: span_attr(&c, "colspan"),
            rowspan: span_attr(&c, "rowspan"),
        })
        .collect()
}

/// Missing, blank, zero or garbage spans count as 1.
fn span_attr(el: &ElementRef<'_>, name: &str) -> usize {
    el.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
        .min(MAX_SPAN)
}

/// Lay cells out on a grid: a colspan repeats its text across columns,
/// a rowspan repeats it in the same column of the following rows.
/// A rowspan whose column was already taken by a colspan in the row below
/// lands at the next free position of that row and does not leak further down.
fn expand_spans(rows: Vec<Vec<Cell>>) -> Vec<Vec<String>> {
    // column → (text, rows still covered including the one being built)
    let mut carried: BTreeMap<usize, (String, usize)> = BTreeMap::new();
    let mut out = Vec::with_capacity(rows.len());

    for cells in rows {
        let mut next: BTreeMap<usize, (String, usize)> = BTreeMap::new();
        let mut line: Vec<String> = Vec::with_capacity(cells.len());
        let mut cells = cells.into_iter();

        loop {
            let reached = carried.range(..=line.len()).next().map(|(&c, _)| c);
            if let Some((text, left)) = reached.and_then(|c| carried.remove(&c)) {
                place(&mut line, &mut next, text, left);
                continue;
            }
            let Some(cell) = cells.next() else { break };
            for _ in 0..cell.colspan {
                place(&mut line, &mut next, cell.text.clone(), cell.rowspan);
            }
        }

        // Spans hanging past the last explicit cell of this row.
        for (col, (text, left)) in carried {
            if line.len() < col {
                line.resize(col, s!());
            }
            place(&mut line, &mut next, text, left);
        }

        carried = next;
        out.push(line);
    }
    out
}

fn place(
    line: &mut Vec<String>,
    next: &mut BTreeMap<usize, (String, usize)>,
    text: String,
    rows: usize,
) {
    if rows > 1 {
        next.insert(line.len(), (text.clone(), rows - 1));
    }
    line.push(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_table_is_none() {
        assert!(first_table("<html><body><p>Page not found</p></body></html>").is_none());
        assert!(first_table("").is_none());
    }

    #[test]
    fn picks_first_table_only() {
        let doc = r#"
            <table><thead><tr><th>Player</th></tr></thead><tbody><tr><td>A</td></tr></tbody></table>
            <table><thead><tr><th>Team</th></tr></thead><tbody><tr><td>B</td></tr></tbody></table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.header, vec![strs(&["Player"])]);
        assert_eq!(t.body, vec![strs(&["A"])]);
    }

    #[test]
    fn thead_colspan_builds_two_levels() {
        let doc = r#"
            <table>
              <thead>
                <tr class="over_header"><th></th><th colspan="2">Games</th></tr>
                <tr><th>Player</th><th>G</th><th>GS</th></tr>
              </thead>
              <tbody><tr><td>J. Doe</td><td>17</td><td>16</td></tr></tbody>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.header, vec![strs(&["", "Games", "Games"]), strs(&["Player", "G", "GS"])]);
        assert_eq!(t.width(), 3);
    }

    #[test]
    fn leading_th_rows_become_header_without_thead() {
        let doc = r#"
            <table>
              <tr><th>Player</th><th>Pos</th></tr>
              <tr><td>J. Doe</td><td>QB</td></tr>
              <tr><th>Player</th><th>Pos</th></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.header, vec![strs(&["Player", "Pos"])]);
        // Only the leading run is header; the repeat stays in the body.
        assert_eq!(t.body, vec![strs(&["J. Doe", "QB"]), strs(&["Player", "Pos"])]);
    }

    #[test]
    fn mixed_th_td_body_rows_keep_all_cells() {
        let doc = r#"
            <table>
              <thead><tr><th>Rk</th><th>Player</th></tr></thead>
              <tbody><tr><th scope="row">1</th><td>J.&nbsp;Doe*</td></tr></tbody>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.body, vec![strs(&["1", "J. Doe*"])]);
    }

    #[test]
    fn rowspan_carries_down() {
        let doc = r#"
            <table>
              <tr><th>Team</th><th>Player</th></tr>
              <tr><td rowspan="2">KAN</td><td>A</td></tr>
              <tr><td>B</td></tr>
              <tr><td>BUF</td><td>C</td></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(
            t.body,
            vec![strs(&["KAN", "A"]), strs(&["KAN", "B"]), strs(&["BUF", "C"])]
        );
    }

    #[test]
    fn rowspan_in_last_column_fills_short_row() {
        let doc = r#"
            <table>
              <tr><th>A</th><th>B</th><th>C</th></tr>
              <tr><td>1</td><td>2</td><td rowspan="2">x</td></tr>
              <tr><td>3</td></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.body, vec![strs(&["1", "2", "x"]), strs(&["3", "", "x"])]);
    }

    #[test]
    fn colspan_over_carried_rowspan_stays_in_its_row() {
        let doc = r#"
            <table>
              <tr><th>A</th><th>B</th><th>C</th></tr>
              <tr><td>x</td><td rowspan="2">y</td><td>z</td></tr>
              <tr><td colspan="2">w</td><td>v</td></tr>
              <tr><td>p</td><td>q</td><td>r</td></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(
            t.body,
            vec![strs(&["x", "y", "z"]), strs(&["w", "w", "y", "v"]), strs(&["p", "q", "r"])]
        );
    }

    #[test]
    fn rowspan_three_rows_deep() {
        let doc = r#"
            <table>
              <tr><td rowspan="3">KAN</td><td>A</td></tr>
              <tr><td>B</td></tr>
              <tr><td>C</td></tr>
              <tr><td>D</td></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(
            t.body,
            vec![strs(&["KAN", "A"]), strs(&["KAN", "B"]), strs(&["KAN", "C"]), strs(&["D"])]
        );
    }

    #[test]
    fn nested_table_rows_are_ignored() {
        let doc = r#"
            <table>
              <tr><th>Player</th><th>Note</th></tr>
              <tr><td>A</td><td><table><tr><td>inner</td></tr></table></td></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.body.len(), 1);
        assert_eq!(t.body[0][0], "A");
    }

    #[test]
    fn tfoot_rows_follow_body() {
        let doc = r#"
            <table>
              <thead><tr><th>Player</th></tr></thead>
              <tfoot><tr><td>League Average</td></tr></tfoot>
              <tbody><tr><td>A</td></tr></tbody>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.body, vec![strs(&["A"]), strs(&["League Average"])]);
    }

    #[test]
    fn bad_spans_count_as_one() {
        let doc = r#"
            <table>
              <tr><th colspan="">A</th><th colspan="0">B</th><th colspan="x">C</th></tr>
            </table>
        "#;
        let t = first_table(doc).unwrap();
        assert_eq!(t.header, vec![strs(&["A", "B", "C"])]);
    }
}
