//! Floor repository

use sqlx::{MySqlPool, Row};

use dormbase_core::Floor;

use crate::db::DbError;

pub struct FloorRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> FloorRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List all floors in store order.
    pub async fn list(&self) -> Result<Vec<Floor>, DbError> {
        let rows = sqlx::query("SELECT floor_id, floor_number, building_id FROM floor")
            .fetch_all(self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<Floor, DbError> {
                Ok(Floor {
                    id: row.try_get(0)?,
                    number: row.try_get(1)?,
                    building_id: row.try_get(2)?,
                })
            })
            .collect()
    }

    /// Insert a floor. A dangling `building_id` bounces off the store's
    /// foreign key and comes back as a constraint error.
    pub async fn create(&self, number: i64, building_id: i64) -> Result<(), DbError> {
        sqlx::query("INSERT INTO floor (floor_number, building_id) VALUES (?, ?)")
            .bind(number)
            .bind(building_id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
