//! Generic tabular rows for the occupancy report.
//!
//! `generate_occupancy_report` returns whatever columns the procedure
//! defines, so the report surface cannot be a fixed record. A [`ReportRow`]
//! is an ordered sequence of (column name, typed cell) pairs that serializes
//! as a JSON object with the columns in result-set order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One value from a report result set.
///
/// A closed set of representable types; anything the store sends that is
/// not listed here is rendered as text before it reaches this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

/// One row of a report: column name → cell, in result-set column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportRow {
    cells: Vec<(String, CellValue)>,
}

impl ReportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.push((column.into(), value));
    }

    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, CellValue)> for ReportRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ReportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_serializes_as_object_in_column_order() {
        let mut row = ReportRow::new();
        row.push("building_name", CellValue::Text("Liyana Hall".into()));
        row.push("total_capacity", CellValue::Int(120));
        row.push("occupancy_rate", CellValue::Float(0.75));
        row.push("notes", CellValue::Null);

        // Serialize straight to text; going through serde_json::Value would
        // re-sort the keys and hide an ordering bug.
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"building_name":"Liyana Hall","total_capacity":120,"occupancy_rate":0.75,"notes":null}"#
        );
    }

    #[test]
    fn cells_are_untagged() {
        assert_eq!(serde_json::to_string(&CellValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&CellValue::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&CellValue::Int(-3)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&CellValue::UInt(9)).unwrap(), "9");
        assert_eq!(
            serde_json::to_string(&CellValue::Text("B-204".into())).unwrap(),
            "\"B-204\""
        );
    }

    #[test]
    fn lookup_by_column_name() {
        let row: ReportRow = [
            ("room_number".to_owned(), CellValue::Int(204)),
            ("occupants".to_owned(), CellValue::Int(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(row.len(), 2);
        assert_eq!(row.get("occupants"), Some(&CellValue::Int(3)));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn empty_row_is_empty_object() {
        let row = ReportRow::new();
        assert!(row.is_empty());
        assert_eq!(serde_json::to_string(&row).unwrap(), "{}");
    }
}
