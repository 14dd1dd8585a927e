// SPDX-License-Identifier: Apache-2.0

//! Lightweight table printer for column-aligned text output.

/// Renders rows with every column padded to its widest cell.
pub struct TablePrinter {
    column_widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl TablePrinter {
    /// Create a new table printer with the given column count.
    pub fn new(column_count: usize) -> Self {
        Self {
            column_widths: vec![0; column_count],
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns as needed.
    pub fn add_row(&mut self, cells: &[&str]) {
        for (width, cell) in self.column_widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows
            .push(cells.iter().map(ToString::to_string).collect());
    }

    /// Render the table; the last column is never padded.
    pub fn render(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();

        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                match self.column_widths.get(i) {
                    Some(&width) if i < last => {
                        let _ = write!(output, "{cell:<width$}  ");
                    }
                    _ => output.push_str(cell),
                }
            }
            output.push('\n');
        }

        output
    }
}
