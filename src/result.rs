use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SqlPaneError};

/// Wire shape of the query endpoint's response. A present `error` field
/// signals failure regardless of what else the body carries.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One result set: a header row plus data rows, all cells as display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl QueryResult {
    /// Builds a result set, rejecting rows whose width does not match the
    /// header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(SqlPaneError::MalformedResult(format!(
                    "row {} has {} cells, expected {}",
                    i + 1,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl TryFrom<ApiResponse> for QueryResult {
    type Error = SqlPaneError;

    fn try_from(response: ApiResponse) -> Result<Self> {
        if let Some(message) = response.error {
            return Err(SqlPaneError::Query(message));
        }
        let rows = response
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(display_cell).collect())
            .collect();
        Self::new(response.columns, rows)
    }
}

/// Cells arrive as arbitrary JSON; everything is shown as text.
fn display_cell(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => "NULL".to_string(),
        other => other.to_string(),
    }
}
