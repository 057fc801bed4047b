//! Core business logic for the authentication system.

use crate::auth::models::{LoginRequest, LoginResponse, UserInfo};
use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;
use sqlx::SqlitePool;
use validator::Validate;

/// Authentication service for handling login and token issuance
pub struct AuthService<'a> {
    pool: &'a SqlitePool,
    jwt_utils: JwtUtils,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, config: &Config) -> Self {
        AuthService {
            pool,
            jwt_utils: JwtUtils::new(config),
        }
    }

    /// Authenticate a confirmed user and issue an access token.
    ///
    /// Unknown email, unconfirmed account, and wrong password all produce
    /// the same outcome so a caller cannot probe which emails exist.
    pub async fn login(&self, login_request: LoginRequest) -> ServiceResult<LoginResponse> {
        if let Err(validation_errors) = login_request.validate() {
            let error_messages: Vec<String> = validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error.message.as_ref().unwrap_or(&"Invalid value".into())
                        )
                    })
                })
                .collect();
            return Err(ServiceError::validation(error_messages.join(", ")));
        }

        let user_repo = UserRepository::new(self.pool);
        let user = user_repo
            .get_verified_by_email(&login_request.email)
            .await?
            .ok_or_else(|| ServiceError::unauthenticated("Incorrect email or password"))?;

        if !verify_password(&login_request.password, &user.password_hash)? {
            return Err(ServiceError::unauthenticated("Incorrect email or password"));
        }

        let access_token = self
            .jwt_utils
            .generate_token(user.id.clone(), user.role.to_string())?;

        Ok(LoginResponse {
            success: true,
            access_token,
            user: UserInfo {
                firstname: user.firstname,
                email: user.email,
                role: user.role,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailConfig;
    use crate::database::models::{CreateUser, UserRole};
    use crate::utils::password::hash_password;
    use sqlx::sqlite::SqlitePoolOptions;
    use uuid::Uuid;

    fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: "login-secret".to_string(),
            jwt_expires_in_seconds: 3600,
            server_port: 3000,
            org_email_domain: "@ku.th".to_string(),
            email: EmailConfig {
                smtp_host: "localhost".to_string(),
                smtp_port: 587,
                smtp_username: "clinic".to_string(),
                smtp_password: "secret".to_string(),
                from_name: "Dental Clinic".to_string(),
                from_email: "clinic@ku.th".to_string(),
            },
        }
    }

    async fn setup_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    async fn seed_user(pool: &SqlitePool, email: &str, password: &str, is_verified: bool) {
        let repo = UserRepository::new(pool);
        repo.create_user(CreateUser {
            id: Uuid::now_v7().to_string(),
            firstname: "Somchai".to_string(),
            lastname: "Dee".to_string(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            phone: "0812345678".to_string(),
            role: UserRole::User,
            is_verified,
        })
        .await
        .unwrap();
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_succeeds_for_confirmed_user() {
        let pool = setup_pool().await;
        let config = test_config();
        seed_user(&pool, "doc@test.com", "Passw0rd", true).await;

        let service = AuthService::new(&pool, &config);
        let response = service
            .login(login_request("doc@test.com", "Passw0rd"))
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.user.firstname, "Somchai");
        assert_eq!(response.user.email, "doc@test.com");
        assert_eq!(response.user.role, UserRole::User);

        let claims = JwtUtils::new(&config)
            .validate_token(&response.access_token)
            .unwrap();
        assert_eq!(claims.role(), "user");
        assert!(!claims.user_id().is_empty());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let pool = setup_pool().await;
        let config = test_config();
        seed_user(&pool, "doc@test.com", "Passw0rd", true).await;
        seed_user(&pool, "pending@test.com", "Passw0rd", false).await;

        let service = AuthService::new(&pool, &config);

        let unknown = service
            .login(login_request("nobody@test.com", "Passw0rd"))
            .await
            .unwrap_err();
        let unverified = service
            .login(login_request("pending@test.com", "Passw0rd"))
            .await
            .unwrap_err();
        let wrong_password = service
            .login(login_request("doc@test.com", "nope"))
            .await
            .unwrap_err();

        for err in [&unknown, &unverified, &wrong_password] {
            assert!(matches!(err, ServiceError::Unauthenticated { .. }));
        }
        assert_eq!(unknown.to_string(), unverified.to_string());
        assert_eq!(unknown.to_string(), wrong_password.to_string());
    }

    #[tokio::test]
    async fn test_login_missing_fields_is_validation_error() {
        let pool = setup_pool().await;
        let config = test_config();
        let service = AuthService::new(&pool, &config);

        let err = service
            .login(login_request("doc@test.com", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }
}
