//! Building repository

use sqlx::{MySqlPool, Row};

use dormbase_core::Building;

use crate::db::DbError;

pub struct BuildingRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> BuildingRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List all buildings in store order.
    pub async fn list(&self) -> Result<Vec<Building>, DbError> {
        let rows =
            sqlx::query("SELECT building_id, building_name, gender_type FROM building")
                .fetch_all(self.pool)
                .await?;

        rows.iter()
            .map(|row| -> Result<Building, DbError> {
                Ok(Building {
                    id: row.try_get(0)?,
                    name: row.try_get(1)?,
                    gender_type: row.try_get(2)?,
                })
            })
            .collect()
    }

    /// Insert a building. The generated key stays in the store.
    pub async fn create(&self, name: &str, gender_type: &str) -> Result<(), DbError> {
        sqlx::query("INSERT INTO building (building_name, gender_type) VALUES (?, ?)")
            .bind(name)
            .bind(gender_type)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p dormbase-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_list_round_trip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        let repo = BuildingRepo::new(&pool);

        repo.create("Test Hall", "Mixed").await.expect("create");
        let buildings = repo.list().await.expect("list");
        assert!(buildings
            .iter()
            .any(|b| b.name == "Test Hall" && b.gender_type == "Mixed"));
    }
}
