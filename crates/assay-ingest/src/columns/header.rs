//! CSV header parsing and column lookup.

/// Column names from a CSV header row.
#[derive(Debug, Clone)]
pub struct CsvHeaders {
    /// Normalized column names (trimmed, BOM removed).
    pub columns: Vec<String>,
}

impl CsvHeaders {
    /// Build from raw header fields.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            columns: fields.into_iter().map(normalize_header).collect(),
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if every column name is blank.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }

    /// Index of a column: exact match first, then case-insensitive.
    pub fn position(&self, column: &str) -> Option<usize> {
        let wanted = column.trim();
        self.columns
            .iter()
            .position(|c| c == wanted)
            .or_else(|| {
                self.columns
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(wanted))
            })
    }

    /// Comma-separated column list for error messages.
    pub fn available(&self) -> String {
        self.columns.join(", ")
    }
}

/// Normalizes a header value by trimming whitespace and a leading UTF-8 BOM.
pub fn normalize_header(value: &str) -> String {
    value
        .strip_prefix('\u{feff}')
        .unwrap_or(value)
        .trim()
        .to_string()
}
