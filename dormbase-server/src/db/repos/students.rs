//! Student repository
//!
//! Creation goes through the `assign_student_to_room` procedure, which
//! validates room, gender, and capacity rules and SIGNALs '45000' on
//! refusal. Update and delete are plain statements; both return the
//! affected-row count, and zero rows is still a success.

use sqlx::{MySqlPool, Row};

use dormbase_core::{NewStudent, Student};

use crate::db::DbError;

pub struct StudentRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let rows = sqlx::query(
            "SELECT student_id, first_name, last_name, gender, room_id, department_id, building_id FROM student",
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<Student, DbError> {
                Ok(Student {
                    id: row.try_get(0)?,
                    first_name: row.try_get(1)?,
                    last_name: row.try_get(2)?,
                    gender: row.try_get(3)?,
                    room_id: row.try_get(4)?,
                    department_id: row.try_get(5)?,
                    building_id: row.try_get(6)?,
                })
            })
            .collect()
    }

    /// Assign a student via the store procedure, the authority on the
    /// room/gender/capacity rules.
    pub async fn assign(&self, student: &NewStudent) -> Result<(), DbError> {
        sqlx::query("CALL assign_student_to_room(?, ?, ?, ?, ?, ?)")
            .bind(&student.first_name)
            .bind(&student.last_name)
            .bind(&student.gender)
            .bind(student.room_id)
            .bind(student.department_id)
            .bind(student.building_id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Full replace of a student's mutable fields. Returns how many rows
    /// matched; zero is not an error.
    pub async fn update(&self, id: i64, student: &NewStudent) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE student SET first_name = ?, last_name = ?, gender = ?, room_id = ?, department_id = ?, building_id = ? WHERE student_id = ?",
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.gender)
        .bind(student.room_id)
        .bind(student.department_id)
        .bind(student.building_id)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete by id. Returns how many rows matched; zero is not an error.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM student WHERE student_id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
