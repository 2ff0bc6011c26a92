// File: crates/bench-chart-core/src/table.rs
// Summary: BenchmarkTable model plus CSV load/save for the `Method,<x...>` layout.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, ParseError, Result};
use crate::output::write_atomic;

/// Header cell written in front of the x-axis values.
pub const HEADER_LABEL: &str = "Method";

/// One data row: series name and its y-values, one per x-axis position.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub name: String,
    pub values: Vec<f64>,
}

/// Parsed form of one input file.
/// Contract: every row holds exactly `x_axis.len()` values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BenchmarkTable {
    pub x_axis: Vec<i64>,
    pub rows: Vec<TableRow>,
}

impl BenchmarkTable {
    pub fn new(x_axis: Vec<i64>) -> Self {
        Self { x_axis, rows: Vec::new() }
    }

    /// Append a row; fails when the value count does not match the x-axis.
    pub fn push_row(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        if values.len() != self.x_axis.len() {
            return Err(ParseError::RowWidth {
                row: self.rows.len(),
                expected: self.x_axis.len(),
                found: values.len(),
            }
            .into());
        }
        self.rows.push(TableRow { name: name.into(), values });
        Ok(())
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Load a benchmark table from `path`. The file handle is released once parsing ends.
pub fn load_table(path: impl AsRef<Path>) -> Result<BenchmarkTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ChartError::NotFound(path.to_path_buf()),
        _ => ChartError::Io(e),
    })?;
    let table = read_table(file)?;
    debug!(
        path = %path.display(),
        columns = table.x_axis.len(),
        rows = table.rows.len(),
        "loaded benchmark table"
    );
    Ok(table)
}

/// Parse a table from any reader. Nothing is returned unless every row is valid.
pub fn read_table<R: Read>(reader: R) -> Result<BenchmarkTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = rdr.records();
    let header = match records.next() {
        Some(rec) => rec.map_err(record_error)?,
        None => return Err(ParseError::MissingHeader.into()),
    };
    let header_line = header.position().map(|p| p.line()).unwrap_or(1);

    let x_axis = header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(column, cell)| {
            cell.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                line: header_line,
                column: column + 1,
                value: cell.to_string(),
                expected: "integer",
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let expected = header.len();
    let mut table = BenchmarkTable::new(x_axis);

    for rec in records {
        let rec = rec.map_err(record_error)?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        if rec.len() != expected {
            return Err(ParseError::ColumnCount { line, expected, found: rec.len() }.into());
        }
        let name = rec.get(0).unwrap_or_default().to_string();
        let values = rec
            .iter()
            .enumerate()
            .skip(1)
            .map(|(column, cell)| {
                cell.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    line,
                    column: column + 1,
                    value: cell.to_string(),
                    expected: "number",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        table.rows.push(TableRow { name, values });
    }

    Ok(table)
}

/// Undecodable cells are malformed content like any other bad cell.
fn record_error(err: csv::Error) -> ChartError {
    if let csv::ErrorKind::Utf8 { pos, err: utf8 } = err.kind() {
        return ParseError::InvalidUtf8 {
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            column: utf8.field() + 1,
        }
        .into();
    }
    ChartError::Csv(err)
}

/// Serialize `table` in the same layout `read_table` accepts.
/// Floats use Rust's shortest round-trip formatting.
pub fn write_table<W: Write>(table: &BenchmarkTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(table.x_axis.len() + 1);
    header.push(HEADER_LABEL.to_string());
    header.extend(table.x_axis.iter().map(|x| x.to_string()));
    wtr.write_record(&header)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.name.clone());
        record.extend(row.values.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `table` to `path`, replacing any existing file atomically.
pub fn save_table(table: &BenchmarkTable, path: impl AsRef<Path>) -> Result<()> {
    let mut buf = Vec::new();
    write_table(table, &mut buf)?;
    write_atomic(path.as_ref(), &buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let src = "Method,1,2,4\nSeq,0.1,0.2,0.4\n";
        let t = read_table(src.as_bytes()).unwrap();
        assert_eq!(t.x_axis, vec![1, 2, 4]);
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.rows[0].name, "Seq");
        assert_eq!(t.rows[0].values, vec![0.1, 0.2, 0.4]);
    }

    #[test]
    fn trims_cells() {
        let t = read_table("Method, 10 , 20\nA , 1.5, 2\n".as_bytes()).unwrap();
        assert_eq!(t.x_axis, vec![10, 20]);
        assert_eq!(t.rows[0].name, "A");
        assert_eq!(t.rows[0].values, vec![1.5, 2.0]);
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = read_table("".as_bytes()).unwrap_err();
        assert!(matches!(err, ChartError::Parse(ParseError::MissingHeader)));
    }

    #[test]
    fn non_integer_header_is_rejected() {
        let err = read_table("Method,1,2.5\n".as_bytes()).unwrap_err();
        match err {
            ChartError::Parse(ParseError::InvalidNumber { line, column, value, expected }) => {
                assert_eq!(line, 1);
                assert_eq!(column, 3);
                assert_eq!(value, "2.5");
                assert_eq!(expected, "integer");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn push_row_checks_width() {
        let mut t = BenchmarkTable::new(vec![1, 2]);
        t.push_row("ok", vec![1.0, 2.0]).unwrap();
        let err = t.push_row("short", vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Parse(ParseError::RowWidth { row: 1, expected: 2, found: 1 })
        ));
        assert_eq!(t.rows.len(), 1);
    }

    #[test]
    fn invalid_utf8_cell_is_a_parse_error() {
        let src: &[u8] = b"Method,1,2\nSeq,0.1,\xff\n";
        match read_table(src).unwrap_err() {
            ChartError::Parse(ParseError::InvalidUtf8 { column, .. }) => assert_eq!(column, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
