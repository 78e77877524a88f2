// File: crates/frame-plot/src/table.rs
// Summary: In-memory CSV table keyed by column name; immutable once loaded.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::ExportError;

/// Named columns of raw (trimmed) cell text, all the same length.
/// Rows are indexed `0..len()` in file order.
#[derive(Clone, Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
    index: HashMap<String, usize>,
    rows: usize,
}

impl Table {
    /// Load a CSV with a header row from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let rdr = reader_builder()
            .from_path(path)
            .map_err(|source| ExportError::DataLoad { path: path.to_path_buf(), source })?;
        Self::load(rdr, path)
    }

    /// Load a CSV with a header row from any reader. Errors report the path as `-`.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, ExportError> {
        Self::load(reader_builder().from_reader(reader), Path::new("-"))
    }

    fn load<R: io::Read>(mut rdr: csv::Reader<R>, path: &Path) -> Result<Self, ExportError> {
        let load_err = |source: csv::Error| ExportError::DataLoad { path: path.to_path_buf(), source };

        let headers: Vec<String> = rdr
            .headers()
            .map_err(load_err)?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            let missing = io::Error::new(io::ErrorKind::InvalidData, "no header row");
            return Err(load_err(csv::Error::from(missing)));
        }

        let mut index = HashMap::with_capacity(headers.len());
        for (i, h) in headers.iter().enumerate() {
            // First occurrence of a duplicated name wins.
            index.entry(h.clone()).or_insert(i);
        }

        let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut rows = 0usize;
        // Not flexible: a record whose length differs from the header is an error.
        for rec in rdr.records() {
            let rec = rec.map_err(load_err)?;
            for (col, cell) in columns.iter_mut().zip(rec.iter()) {
                col.push(cell.to_string());
            }
            rows += 1;
        }

        debug!(path = %path.display(), rows, columns = headers.len(), "loaded table");
        Ok(Self { headers, columns, index, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Raw cell text of column `name`, in row order.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.index.get(name).map(|&i| self.columns[i].as_slice())
    }

    /// Column `name` parsed as numbers. Empty cells and missing-value markers become NaN.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, ExportError> {
        let cells = self
            .column(name)
            .ok_or_else(|| ExportError::MissingColumn { column: name.to_string() })?;
        cells
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                if is_missing_marker(cell) {
                    return Ok(f64::NAN);
                }
                cell.parse::<f64>().map_err(|_| ExportError::NonNumeric {
                    column: name.to_string(),
                    row,
                    value: cell.clone(),
                })
            })
            .collect()
    }
}

/// Cell texts read as "no value", matching the usual pandas `read_csv` defaults.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing_marker(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(true).trim(csv::Trim::All);
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn table(text: &str) -> Table {
        Table::from_reader(text.as_bytes()).expect("load")
    }

    #[test]
    fn loads_columns_by_name() {
        let t = table("frame,mean\n0,1.0\n1,2.0\n2,1.5\n");
        assert_eq!(t.len(), 3);
        assert_eq!(t.headers(), &["frame".to_string(), "mean".to_string()]);
        assert_eq!(t.numeric_column("frame").unwrap(), vec![0.0, 1.0, 2.0]);
        assert_eq!(t.numeric_column("mean").unwrap(), vec![1.0, 2.0, 1.5]);
    }

    #[test]
    fn trims_headers_and_cells() {
        let t = table(" frame , mean \n 0 , 1.25 \n");
        assert!(t.has_column("frame"));
        assert_eq!(t.numeric_column("mean").unwrap(), vec![1.25]);
    }

    #[test]
    fn keeps_file_order_for_unsorted_frames() {
        let t = table("frame,max\n2,9\n0,7\n2,8\n");
        assert_eq!(t.numeric_column("frame").unwrap(), vec![2.0, 0.0, 2.0]);
        assert_eq!(t.numeric_column("max").unwrap(), vec![9.0, 7.0, 8.0]);
    }

    #[test]
    fn empty_cell_is_nan() {
        let t = table("frame,min\n0,\n1,3\n");
        let v = t.numeric_column("min").unwrap();
        assert!(v[0].is_nan());
        assert_eq!(v[1], 3.0);
    }

    #[test]
    fn missing_value_markers_are_nan() {
        let markers = ["NA", "N/A", "n/a", "NULL", "null", "None", "#N/A", "<NA>", "nan", "-1.#IND"];
        let mut text = String::from("frame,mean\n");
        for (i, m) in markers.iter().enumerate() {
            text.push_str(&format!("{i},{m}\n"));
        }
        text.push_str("99,4.5\n");
        let v = table(&text).numeric_column("mean").unwrap();
        assert_eq!(v.len(), markers.len() + 1);
        assert!(v[..markers.len()].iter().all(|x| x.is_nan()));
        assert_eq!(v[markers.len()], 4.5);
    }

    #[test]
    fn near_miss_markers_are_still_rejected() {
        let t = table("frame,mean\n0,NONE\n");
        assert!(matches!(t.numeric_column("mean"), Err(ExportError::NonNumeric { .. })));
    }

    #[test]
    fn missing_column() {
        let t = table("frame\n0\n");
        match t.numeric_column("median") {
            Err(ExportError::MissingColumn { column }) => assert_eq!(column, "median"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
        assert!(t.column("median").is_none());
    }

    #[test]
    fn non_numeric_cell_reports_position() {
        let t = table("frame,mean\n0,1\n1,abc\n");
        match t.numeric_column("mean") {
            Err(ExportError::NonNumeric { column, row, value }) => {
                assert_eq!((column.as_str(), row, value.as_str()), ("mean", 1, "abc"));
            }
            other => panic!("expected NonNumeric, got {other:?}"),
        }
        // Unplotted text columns are fine as long as nobody asks for them as numbers.
        assert_eq!(t.column("mean").unwrap()[1], "abc");
    }

    #[test]
    fn ragged_rows_fail_to_load() {
        let err = Table::from_reader("frame,mean\n0,1\n1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::DataLoad { .. }));
    }

    #[test]
    fn empty_input_fails_to_load() {
        let err = Table::from_reader("".as_bytes()).unwrap_err();
        assert!(err.is_data_load());
    }

    #[test]
    fn duplicate_header_first_wins() {
        let t = table("frame,mean,mean\n0,1,2\n");
        assert_eq!(t.numeric_column("mean").unwrap(), vec![1.0]);
    }

    #[test]
    fn header_only_is_empty_table() {
        let t = table("frame,mean\n");
        assert!(t.is_empty());
        assert_eq!(t.numeric_column("mean").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn missing_file_is_data_load_error() {
        let err = Table::from_path("/definitely/not/here.csv").unwrap_err();
        match err {
            ExportError::DataLoad { path, .. } => assert_eq!(path, PathBuf::from("/definitely/not/here.csv")),
            other => panic!("expected DataLoad, got {other:?}"),
        }
    }
}
