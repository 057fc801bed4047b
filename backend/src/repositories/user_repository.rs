//! Database repository for user management operations.
//!
//! Provides persistence operations for confirmed user accounts.

use crate::database::models::{CreateUser, User};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{SqlitePool, SqliteExecutor};

/// Repository for user database operations.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a user row on the given executor. Exposed separately from
    /// [`create_user`](Self::create_user) so callers holding a transaction
    /// can participate in it.
    pub async fn insert(
        executor: impl SqliteExecutor<'_>,
        user: &CreateUser,
        created_at: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, firstname, lastname, email, password_hash, phone, role, is_verified, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.phone)
        .bind(&user.role)
        .bind(user.is_verified)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Creates a new user in the database.
    ///
    /// # Arguments
    /// * `user` - CreateUser DTO containing user details
    ///
    /// # Returns
    /// The newly created User with all fields populated
    pub async fn create_user(&self, user: CreateUser) -> Result<User> {
        let created_at = Utc::now();
        Self::insert(self.pool, &user, created_at).await?;

        Ok(User {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            password_hash: user.password_hash,
            phone: user.phone,
            role: user.role,
            is_verified: user.is_verified,
            created_at,
        })
    }

    /// Retrieves a confirmed (`is_verified`) user by email.
    ///
    /// # Arguments
    /// * `email` - Email to search for, matched case-sensitively as stored
    ///
    /// # Returns
    /// `Some(User)` if a verified user exists, `None` otherwise
    pub async fn get_verified_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, password_hash, phone, role, is_verified, created_at
            FROM users WHERE email = ? AND is_verified = 1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Checks if any user already owns an email address.
    ///
    /// # Arguments
    /// * `email` - Email to check
    ///
    /// # Returns
    /// `true` if a user with this email exists
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
                .bind(email)
                .fetch_one(self.pool)
                .await?;

        Ok(count > 0)
    }
}
