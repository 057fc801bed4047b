//! Database repository for doctor profiles.

use crate::database::models::Doctor;
use anyhow::Result;
use sqlx::SqlitePool;

/// Repository for doctor-profile database operations.
pub struct DoctorRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> DoctorRepository<'a> {
    /// Creates a new DoctorRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a doctor profile linked to its owning user.
    pub async fn create_doctor(&self, doctor: &Doctor) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO doctors (user_id, license_number, specialization, phone, email)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&doctor.user_id)
        .bind(&doctor.license_number)
        .bind(&doctor.specialization)
        .bind(&doctor.phone)
        .bind(&doctor.email)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Retrieves a doctor profile by its owning user id.
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Doctor>> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT user_id, license_number, specialization, phone, email
            FROM doctors WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(doctor)
    }
}
