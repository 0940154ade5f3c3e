//! Table rendering utilities for CLI outputs.
//! Column widths follow the widest visible cell, capped at `max_width`.

use super::formatting::{pad_right, truncate, visible_width};

pub struct Column {
    pub header: String,
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
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

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| visible_width(cell))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0);
                widest.min(col.max_width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&truncate(&col.header, *w), *w));
            out.push_str("  ");
        }
        out.truncate(out.trim_end().len());
        out.push('\n');

        out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let mut line = String::new();
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&pad_right(&truncate(cell, *w), *w));
                line.push_str("  ");
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}
