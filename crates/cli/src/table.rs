//! Minimal bordered text table for terminal output.

use std::fmt;

pub(crate) struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub(crate) fn new(headers: &[&str]) -> Self {
        TextTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row. Missing cells render empty; extra cells are dropped.
    pub(crate) fn add_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let border: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+";

        let write_row = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            for (cell, w) in cells.iter().zip(&widths) {
                write!(f, "| {:<width$} ", cell, width = *w)?;
            }
            writeln!(f, "|")
        };

        writeln!(f, "{}", border)?;
        write_row(f, &self.headers)?;
        writeln!(f, "{}", border)?;
        for row in &self.rows {
            write_row(f, row)?;
        }
        write!(f, "{}", border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_aligned_columns() {
        let mut table = TextTable::new(&["ID", "Name"]);
        table.add_row(vec!["@I1@".to_string(), "Al".to_string()]);
        table.add_row(vec!["@I22@".to_string()]);
        let expected = "\
+-------+------+
| ID    | Name |
+-------+------+
| @I1@  | Al   |
| @I22@ |      |
+-------+------+";
        assert_eq!(table.to_string(), expected);
    }
}
