//! Service-native result structures.
//!
//! Rows are kept as the service delivers them: ordered column values with no
//! decoding into typed records and no column-name mapping. Athena returns
//! every value as an optional string (VarCharValue); a NULL column is `None`.

/// One row of a query result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    /// Column values in result order. `None` marks a NULL column.
    pub columns: Vec<Option<String>>,
}

impl ResultRow {
    /// Creates a row from its column values.
    pub fn new(columns: Vec<Option<String>>) -> Self {
        Self { columns }
    }
}

/// The first page of rows returned for a succeeded query.
///
/// Only one page is ever fetched; the total row count on the service side may
/// be larger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    /// Rows in result order. Athena includes the header row first.
    pub rows: Vec<ResultRow>,
}

impl ResultSet {
    /// Creates a result set from its rows.
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    /// Number of rows in this page, header row included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
