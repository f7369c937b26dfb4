//! CSV file reading into raw measurement columns.

use std::path::Path;

use assay_normalize::RawValue;
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// A named column of typed cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnData {
    /// Column name as written in the header.
    pub name: String,
    /// One value per data row, in file order.
    pub values: Vec<RawValue>,
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    check_file_size(path)?;
    let file = std::fs::File::open(path).map_err(|e| io_error(path, e))?;
    Ok(ReaderBuilder::new().has_headers(true).from_reader(file))
}

fn headers_of(path: &Path, reader: &mut csv::Reader<std::fs::File>) -> Result<CsvHeaders> {
    let record = reader
        .headers()
        .map_err(|e| IngestError::csv(path, e))?;
    let headers = CsvHeaders::from_fields(record.iter());
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if headers.is_blank() {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Reads only the header row.
pub fn read_csv_headers(path: &Path) -> Result<CsvHeaders> {
    let mut reader = open_reader(path)?;
    headers_of(path, &mut reader)
}

/// Reads one column from a CSV file.
pub fn read_column(path: &Path, column: &str) -> Result<ColumnData> {
    let mut columns = read_columns(path, &[column])?;
    Ok(columns.remove(0))
}

/// Reads several columns from a CSV file in one pass.
///
/// Columns come back in the requested order. Each cell is typed with
/// [`RawValue::from_cell`]: blank cells are missing, clean numbers are
/// floats, everything else stays text.
pub fn read_columns(path: &Path, columns: &[&str]) -> Result<Vec<ColumnData>> {
    let mut reader = open_reader(path)?;
    let headers = headers_of(path, &mut reader)?;

    let indices = columns
        .iter()
        .map(|column| {
            headers
                .position(column)
                .ok_or_else(|| IngestError::ColumnNotFound {
                    column: (*column).to_string(),
                    path: path.to_path_buf(),
                    available: headers.available(),
                })
        })
        .collect::<Result<Vec<usize>>>()?;

    let mut data: Vec<ColumnData> = indices
        .iter()
        .map(|&index| ColumnData {
            name: headers.columns[index].clone(),
            values: Vec::new(),
        })
        .collect();

    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, e))?;
        for (column, &index) in data.iter_mut().zip(&indices) {
            let cell = record.get(index).unwrap_or("");
            column.values.push(RawValue::from_cell(cell));
        }
    }

    tracing::debug!(
        path = %path.display(),
        columns = data.len(),
        rows = data.first().map_or(0, |c| c.values.len()),
        "loaded CSV columns"
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_headers() {
        let file = create_temp_csv("id,predicted,measured\n1,2,3\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers.columns, vec!["id", "predicted", "measured"]);
    }

    #[test]
    fn test_read_column_types_cells() {
        let file = create_temp_csv("id,value\n1,1.5\n2,<2\n3,\n4,3.7 mg\n");
        let column = read_column(file.path(), "value").unwrap();
        assert_eq!(column.name, "value");
        assert_eq!(
            column.values,
            vec![
                RawValue::Float(1.5),
                RawValue::Text("<2".into()),
                RawValue::Missing,
                RawValue::Text("3.7 mg".into()),
            ]
        );
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_csv("a\n1\n");
        let err = check_file_size_with_limit(file.path(), 1).unwrap_err();
        assert!(matches!(err, IngestError::FileTooLarge { max_size: 1, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = read_column(Path::new("/nonexistent/assay.csv"), "value").unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
