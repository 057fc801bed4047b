//! Database repository for pending registrations.
//!
//! A pending row exists from registration until the email's one-time code
//! is confirmed, at which point the row is removed.

use crate::database::models::{CreatePendingUser, PendingUser};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{SqlitePool, SqliteExecutor};

/// Repository for pending-registration database operations.
pub struct PendingUserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> PendingUserRepository<'a> {
    /// Creates a new PendingUserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Replaces any pending registration for the email with a fresh one.
    ///
    /// The delete and insert are two separate statements; a concurrent
    /// registration for the same email wins by writing last.
    pub async fn replace(&self, pending: &CreatePendingUser) -> Result<()> {
        Self::delete(self.pool, &pending.email).await?;

        sqlx::query(
            r#"
            INSERT INTO pending_users (email, firstname, lastname, password_hash, phone)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&pending.email)
        .bind(&pending.firstname)
        .bind(&pending.lastname)
        .bind(&pending.password_hash)
        .bind(&pending.phone)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Arms the pending registration with a one-time code and its expiry.
    ///
    /// # Returns
    /// `false` if no pending registration exists for the email
    pub async fn arm_otp(
        &self,
        email: &str,
        otp: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE pending_users
            SET otp = ?, otp_expires_at = ?
            WHERE email = ?
            "#,
        )
        .bind(otp)
        .bind(expires_at)
        .bind(email)
        .execute(self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Retrieves the pending registration matching both email and code.
    ///
    /// Expiry is not checked here; the caller decides what a stale match
    /// means.
    pub async fn find_by_email_and_otp(
        &self,
        email: &str,
        otp: &str,
    ) -> Result<Option<PendingUser>> {
        let pending = sqlx::query_as::<_, PendingUser>(
            r#"
            SELECT email, firstname, lastname, password_hash, phone, otp, otp_expires_at
            FROM pending_users WHERE email = ? AND otp = ?
            "#,
        )
        .bind(email)
        .bind(otp)
        .fetch_optional(self.pool)
        .await?;

        Ok(pending)
    }

    /// Deletes the pending registration for an email on the given executor.
    pub async fn delete(executor: impl SqliteExecutor<'_>, email: &str) -> Result<()> {
        sqlx::query("DELETE FROM pending_users WHERE email = ?")
            .bind(email)
            .execute(executor)
            .await?;

        Ok(())
    }
}
