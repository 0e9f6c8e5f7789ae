//! Department repository

use sqlx::{MySqlPool, Row};

use dormbase_core::Department;

use crate::db::DbError;

pub struct DepartmentRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> DepartmentRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Department>, DbError> {
        let rows = sqlx::query("SELECT department_id, department_name FROM department")
            .fetch_all(self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<Department, DbError> {
                Ok(Department {
                    id: row.try_get(0)?,
                    name: row.try_get(1)?,
                })
            })
            .collect()
    }

    /// Insert a department. Duplicate names surface as `DbError::Duplicate`.
    pub async fn create(&self, name: &str) -> Result<(), DbError> {
        sqlx::query("INSERT INTO department (department_name) VALUES (?)")
            .bind(name)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
