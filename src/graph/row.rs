//! Row and streaming types for query results.

use crate::error::AppError;
use futures::Stream;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::pin::Pin;

/// Parameters for Cypher queries.
///
/// A map of parameter names to JSON values that can be passed to queries.
pub type Params = HashMap<String, JsonValue>;

/// A stream of rows from a query result.
pub type RowStream<'a> = Pin<Box<dyn Stream<Item = Result<Row, AppError>> + Send + 'a>>;

/// A single row from a query result.
///
/// Contains column values as JSON, with typed extraction via [`Row::get`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    data: HashMap<String, JsonValue>,
}

impl Row {
    /// Creates a new row from a map of column names to values.
    pub fn new(data: HashMap<String, JsonValue>) -> Self {
        Self { data }
    }

    /// Gets a value from the row by column name, deserializing to the requested type.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not found or if deserialization fails.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, AppError> {
        self.data
            .get(key)
            .ok_or_else(|| AppError::Internal(format!("column not found: {}", key)))
            .and_then(|v| {
                serde_json::from_value(v.clone()).map_err(|e| {
                    AppError::Internal(format!("failed to deserialize '{}': {}", key, e))
                })
            })
    }

    /// Gets a value from the row, returning `None` if the key doesn't exist or is null.
    ///
    /// Still returns an error if the key exists but deserialization fails.
    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.data.get(key) {
            Some(v) if v.is_null() => Ok(None),
            Some(v) => serde_json::from_value(v.clone())
                .map(Some)
                .map_err(|e| AppError::Internal(format!("failed to deserialize '{}': {}", key, e))),
            None => Ok(None),
        }
    }

    /// Deserializes the whole row, treating column names as field names.
    pub fn to<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let object: serde_json::Map<String, JsonValue> = self
            .data
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        serde_json::from_value(JsonValue::Object(object))
            .map_err(|e| AppError::Internal(format!("failed to deserialize row: {}", e)))
    }
}

impl From<HashMap<String, JsonValue>> for Row {
    fn from(data: HashMap<String, JsonValue>) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<[(&str, JsonValue); N]> for Row {
    fn from(columns: [(&str, JsonValue); N]) -> Self {
        Self::new(
            columns
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_get_string() {
        let row = Row::from([("name", json!("test"))]);

        let name: String = row.get("name").unwrap();
        assert_eq!(name, "test");
    }

    #[test]
    fn test_row_get_map() {
        let row = Row::from([(
            "building",
            json!({"uri": "urn:b1", "label": "HQ", "floors": 3}),
        )]);

        let props: serde_json::Map<String, JsonValue> = row.get("building").unwrap();
        assert_eq!(props["uri"], json!("urn:b1"));
        assert_eq!(props["floors"], json!(3));
    }

    #[test]
    fn test_row_get_missing_key() {
        let row = Row::new(HashMap::new());
        let result: Result<String, _> = row.get("missing");
        assert!(result.is_err());
    }

    #[test]
    fn test_row_get_wrong_type() {
        let row = Row::from([("count", json!("many"))]);
        let result: Result<i64, _> = row.get("count");
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_row_get_opt_missing() {
        let row = Row::new(HashMap::new());
        let name: Option<String> = row.get_opt("missing").unwrap();
        assert_eq!(name, None);
    }

    #[test]
    fn test_row_get_opt_null() {
        let row = Row::from([("name", JsonValue::Null)]);

        let name: Option<String> = row.get_opt("name").unwrap();
        assert_eq!(name, None);
    }

    #[test]
    fn test_row_to_struct() {
        #[derive(serde::Deserialize)]
        struct Summary {
            status: String,
            loaded: i64,
        }

        let row = Row::from([("status", json!("OK")), ("loaded", json!(12))]);
        let summary: Summary = row.to().unwrap();
        assert_eq!(summary.status, "OK");
        assert_eq!(summary.loaded, 12);
    }
}
