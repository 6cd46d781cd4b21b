//! Table rendering utilities for CLI outputs.
//!
//! Cells are padded on their plain text, then an optional ANSI color is
//! applied, so colored cells keep the column alignment.

use super::formatting::{pad_left, pad_right, truncate};
use super::colors::RESET;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            align: Align::Right,
            ..Self::new(header, width)
        }
    }
}

/// A cell: plain text plus the color to render it with.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub color: &'static str,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: RESET,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn fit(col: &Column, text: &str) -> String {
        let text = truncate(text, col.width);
        match col.align {
            Align::Left => pad_right(&text, col.width),
            Align::Right => pad_left(&text, col.width),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|col| Self::fit(col, &col.header))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let total: usize =
            self.columns.iter().map(|c| c.width).sum::<usize>() + self.columns.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(row.iter())
                .map(|(col, cell)| {
                    let fitted = Self::fit(col, &cell.text);
                    if cell.color == RESET {
                        fitted
                    } else {
                        format!("{}{}{}", cell.color, fitted, RESET)
                    }
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}
