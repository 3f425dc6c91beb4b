//! Table rendering utilities for CLI outputs.
//!
//! Padding is computed from terminal display width, not char count, so
//! columns stay aligned when titles and addresses contain wide (CJK) text.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn column_width(&self, i: usize) -> usize {
        let cells = self.rows.iter().map(|r| r[i].width());
        cells
            .chain(std::iter::once(self.columns[i].header.width()))
            .max()
            .unwrap_or(0)
            .max(self.columns[i].min_width)
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.columns.len())
            .map(|i| self.column_width(i))
            .collect();

        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                out.push_str(&pad(cell, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}
