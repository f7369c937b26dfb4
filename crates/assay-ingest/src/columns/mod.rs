//! CSV column reading.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{
    ColumnData, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_column,
    read_columns, read_csv_headers,
};
