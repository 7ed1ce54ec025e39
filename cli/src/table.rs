// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

use unicode_width::UnicodeWidthStr;

/// A column of a plain-text table.
pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn stylize(&self, data: &T, cell: String) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub struct Table<'a, T, C: Column<T>> {
    pub columns: Vec<C>,
    pub separator: String,
    pub data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn render(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = column_max_widths(&self.columns, &cells);

        let mut out = String::new();
        for (row_cells, row) in cells.into_iter().zip(self.data) {
            for (j, (col, cell)) in self.columns.iter().zip(row_cells).enumerate() {
                let last = j == self.columns.len() - 1;
                let padded = if last && col.padding_direction() == PaddingDirection::Left {
                    cell // no trailing padding on a left-aligned last column
                } else {
                    pad(cell, widths[j], col.padding_direction())
                };
                out.push_str(&col.stylize(row, padded));
                out.push_str(if last { "\n" } else { &self.separator });
            }
        }
        out
    }
}

fn column_max_widths<T, C: Column<T>>(columns: &[C], cells: &[Vec<String>]) -> Vec<usize> {
    let mut widths = vec![0; columns.len()];
    for row in cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }
    widths
}

fn pad(cell: String, width: usize, direction: PaddingDirection) -> String {
    let fill = width.saturating_sub(cell.width());
    match direction {
        PaddingDirection::Left => format!("{cell}{}", " ".repeat(fill)),
        PaddingDirection::Right => format!("{}{cell}", " ".repeat(fill)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain(usize);

    impl Column<Vec<String>> for Plain {
        fn format(&self, data: &Vec<String>) -> String {
            data[self.0].clone()
        }

        fn padding_direction(&self) -> PaddingDirection {
            if self.0 == 0 {
                PaddingDirection::Right
            } else {
                PaddingDirection::Left
            }
        }

        fn stylize(&self, _data: &Vec<String>, cell: String) -> String {
            cell
        }
    }

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let data = vec![
            vec!["1".to_string(), "short".to_string()],
            vec!["10".to_string(), "a longer cell".to_string()],
        ];
        let table = Table {
            columns: vec![Plain(0), Plain(1)],
            separator: "  ".to_string(),
            data: &data,
        };

        assert_eq!(table.render(), " 1  short\n10  a longer cell\n");
    }
}
