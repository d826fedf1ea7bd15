//! Unit-annotated whitespace-separated tables.
//!
//! ```text
//! # nm 1/cm
//! 100.0 2.0
//! 200.0 4.0   # trailing comments are stripped
//! ```
//!
//! The first non-blank line declares one unit per column. Rows are re-sorted
//! by the first column after loading.

use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::units::{QuantityArray, Unit};

/// Errors from loading a data table.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Data file not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed header in {file}: {message}")]
    MalformedHeader { file: String, message: String },

    #[error("Malformed row in {file} at line {line}: {message}")]
    MalformedRow {
        file: String,
        line: usize,
        message: String,
    },
}

/// A parsed table: one unit-tagged array per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<QuantityArray>,
}

impl Table {
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn nrows(&self) -> usize {
        self.columns.first().map_or(0, QuantityArray::len)
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn parse_header(file: &str, line: &str, ncols: usize) -> Result<Vec<Unit>, DataError> {
    let malformed = |message: String| DataError::MalformedHeader {
        file: file.to_string(),
        message,
    };

    let rest = line
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| malformed(format!("expected '# <unit> ...', found '{}'", line.trim())))?;
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() != ncols {
        return Err(malformed(format!(
            "expected {} unit(s), found {}",
            ncols,
            tokens.len()
        )));
    }
    tokens
        .iter()
        .map(|t| Unit::parse(t).map_err(|e| malformed(e.to_string())))
        .collect()
}

/// Parse table `content` with exactly `ncols` columns.
///
/// # Arguments
/// * `file` - Name used in error messages.
/// * `content` - Full text of the table.
/// * `ncols` - Expected number of columns, which must match the header.
pub fn parse_table(file: &str, content: &str, ncols: usize) -> Result<Table, DataError> {
    let mut lines = content
        .lines()
        .enumerate()
        .skip_while(|(_, l)| l.trim().is_empty());

    let units = match lines.next() {
        Some((_, header)) => parse_header(file, header, ncols)?,
        None => {
            return Err(DataError::MalformedHeader {
                file: file.to_string(),
                message: "file is empty".to_string(),
            })
        }
    };

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (idx, raw) in lines {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        let row_error = |message: String| DataError::MalformedRow {
            file: file.to_string(),
            line: idx + 1,
            message,
        };

        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|_| row_error(format!("'{}' is not a number", tok)))
            })
            .collect::<Result<Vec<f64>, _>>()?;
        if row.len() != ncols {
            return Err(row_error(format!(
                "expected {} values, found {}",
                ncols,
                row.len()
            )));
        }
        rows.push(row);
    }

    rows.sort_by(|a, b| a[0].total_cmp(&b[0]));
    debug!("parsed {} rows from {}", rows.len(), file);

    let columns = units
        .into_iter()
        .enumerate()
        .map(|(col, unit)| QuantityArray::new(rows.iter().map(|r| r[col]).collect(), unit))
        .collect();
    Ok(Table { columns })
}

/// Parse a two-column table into `(x, y)`.
pub fn parse_spectrum(
    file: &str,
    content: &str,
) -> Result<(QuantityArray, QuantityArray), DataError> {
    let mut table = parse_table(file, content, 2)?;
    let y = table.columns.pop();
    let x = table.columns.pop();
    match (x, y) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(DataError::MalformedHeader {
            file: file.to_string(),
            message: "expected two columns".to_string(),
        }),
    }
}

/// Read a two-column table from the filesystem.
pub fn read_data_path(path: &Path) -> Result<(QuantityArray, QuantityArray), DataError> {
    let name = path.display().to_string();
    if !path.exists() {
        return Err(DataError::NotFound(name));
    }
    let content = fs::read_to_string(path)?;
    parse_spectrum(&name, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sorts_and_strips_comments() {
        let content = "\n# nm dimensionless\n# a comment\n300 0.3 # trailing\n\n100 0.1\n200 0.2\n";
        let (x, y) = parse_spectrum("t.dat", content).unwrap();
        assert_eq!(x.values(), &[100.0, 200.0, 300.0]);
        assert_eq!(y.values(), &[0.1, 0.2, 0.3]);
        assert_eq!(x.unit(), Unit::NANOMETER);
        assert_eq!(y.unit(), Unit::DIMENSIONLESS);
    }

    #[test]
    fn test_header_errors() {
        assert!(matches!(
            parse_spectrum("t.dat", "100 2\n200 4\n"),
            Err(DataError::MalformedHeader { .. })
        ));
        assert!(matches!(
            parse_spectrum("t.dat", "# nm\n100 2\n"),
            Err(DataError::MalformedHeader { .. })
        ));
        assert!(matches!(
            parse_spectrum("t.dat", "# nm parsec\n100 2\n"),
            Err(DataError::MalformedHeader { .. })
        ));
        assert!(matches!(
            parse_spectrum("t.dat", ""),
            Err(DataError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_row_errors_report_line() {
        match parse_spectrum("t.dat", "# nm 1/cm\n100 2\nabc 4\n") {
            Err(DataError::MalformedRow { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected MalformedRow, got {:?}", other),
        }
        assert!(matches!(
            parse_spectrum("t.dat", "# nm 1/cm\n100 2 3\n"),
            Err(DataError::MalformedRow { .. })
        ));
    }

    #[test]
    fn test_three_column_table() {
        let table = parse_table("t.dat", "# nm 1 1\n2 0.2 1.5\n1 0.1 1.4\n", 3).unwrap();
        assert_eq!(table.ncols(), 3);
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.columns[2].values(), &[1.4, 1.5]);
    }
}
