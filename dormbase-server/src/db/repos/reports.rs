//! Report repository
//!
//! `generate_occupancy_report` returns whatever columns the procedure's
//! current version defines, so rows are decoded by introspecting the result
//! set's column names and types rather than into a fixed record. Binary and
//! temporal columns are rendered as text; NULL stays NULL.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, MySqlPool, Row, TypeInfo};

use dormbase_core::{CellValue, ReportRow};

use crate::db::DbError;

pub struct ReportRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ReportRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Run the occupancy report. An empty result set yields an empty `Vec`.
    pub async fn occupancy(&self) -> Result<Vec<ReportRow>, DbError> {
        let rows = sqlx::query("CALL generate_occupancy_report()")
            .fetch_all(self.pool)
            .await?;

        rows.iter().map(report_row).collect()
    }
}

fn report_row(row: &MySqlRow) -> Result<ReportRow, DbError> {
    let mut report = ReportRow::new();
    for (index, column) in row.columns().iter().enumerate() {
        report.push(column.name(), decode_cell(row, index)?);
    }
    Ok(report)
}

/// Decode one cell by the column's declared type.
///
/// The arms cover the types the report schema can produce today; the
/// fallback renders anything else (DECIMAL included, which the wire sends
/// as text) through an unchecked string decode so a procedure change
/// degrades to text rather than a 500.
fn decode_cell(row: &MySqlRow, index: usize) -> Result<CellValue, sqlx::Error> {
    let type_name = row.columns()[index].type_info().name();

    let cell = match type_name {
        "BOOLEAN" => row
            .try_get::<Option<bool>, _>(index)?
            .map_or(CellValue::Null, CellValue::Bool),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => row
            .try_get::<Option<i64>, _>(index)?
            .map_or(CellValue::Null, CellValue::Int),
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => row
            .try_get::<Option<u64>, _>(index)?
            .map_or(CellValue::Null, CellValue::UInt),
        "FLOAT" | "DOUBLE" => row
            .try_get::<Option<f64>, _>(index)?
            .map_or(CellValue::Null, CellValue::Float),
        "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" => row
            .try_get::<Option<String>, _>(index)?
            .map_or(CellValue::Null, CellValue::Text),
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => row
            .try_get::<Option<Vec<u8>>, _>(index)?
            .map_or(CellValue::Null, |bytes| {
                CellValue::Text(String::from_utf8_lossy(&bytes).into_owned())
            }),
        "TIMESTAMP" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)?
            .map_or(CellValue::Null, |ts| CellValue::Text(ts.to_rfc3339())),
        "DATETIME" => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map_or(CellValue::Null, |dt| CellValue::Text(dt.to_string())),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)?
            .map_or(CellValue::Null, |d| CellValue::Text(d.to_string())),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(index)?
            .map_or(CellValue::Null, |t| CellValue::Text(t.to_string())),
        _ => row
            .try_get_unchecked::<Option<String>, _>(index)?
            .map_or(CellValue::Null, CellValue::Text),
    };

    Ok(cell)
}
