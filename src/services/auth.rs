//! Authentication service: registration, login and session tokens

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        user::{LoginCredentials, RegisterUser},
        Session, SessionClaims, User,
    },
    repository::Repository,
};

/// Identity resolved from a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i32,
    pub session_id: String,
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new user and open a session for it
    pub async fn register(&self, input: RegisterUser) -> AppResult<(String, User)> {
        input.validate()?;

        if self.repository.users.get_by_email(&input.email).await.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_password(input.password).await?;
        // create() re-checks the email under the write lock
        let user = self
            .repository
            .users
            .create(&input.username, &input.email, password_hash)
            .await?;

        tracing::info!("Registered user id={}", user.id);

        let token = self.create_session(user.id).await?;
        Ok((token, user))
    }

    /// Authenticate by email and password. Every login opens an additional
    /// session; earlier tokens stay valid.
    pub async fn login(&self, credentials: LoginCredentials) -> AppResult<(String, User)> {
        let invalid = || AppError::Authentication("Invalid credentials".to_string());

        let user = self
            .repository
            .users
            .get_by_email(&credentials.email)
            .await
            .ok_or_else(invalid)?;

        if !verify_password(user.password_hash.clone(), credentials.password).await? {
            tracing::debug!("Rejected login for user id={}", user.id);
            return Err(invalid());
        }

        tracing::info!("User id={} logged in", user.id);

        let token = self.create_session(user.id).await?;
        Ok((token, user))
    }

    /// Resolve a bearer token to the user it was issued for
    pub async fn authenticate(&self, token: &str) -> AppResult<AuthContext> {
        let not_authorized = || AppError::Authentication("Not authorized".to_string());

        let claims = SessionClaims::from_token(token, &self.config.jwt_secret).map_err(|e| {
            tracing::debug!("Rejected bearer token: {}", e);
            not_authorized()
        })?;

        let session = self
            .repository
            .sessions
            .get(&claims.jti, Utc::now())
            .await
            .ok_or_else(|| {
                tracing::debug!("No live session for token id={}", claims.jti);
                not_authorized()
            })?;

        if session.user_id != claims.user_id {
            return Err(not_authorized());
        }

        Ok(AuthContext {
            user_id: session.user_id,
            session_id: session.id,
        })
    }

    /// Revoke one session
    pub async fn logout(&self, context: &AuthContext) -> AppResult<()> {
        if !self.repository.sessions.remove(&context.session_id).await {
            return Err(AppError::Authentication("Not authorized".to_string()));
        }
        tracing::info!("User id={} logged out", context.user_id);
        Ok(())
    }

    /// Open a session and sign a token referring to it
    async fn create_session(&self, user_id: i32) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = self
            .config
            .session_ttl()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Session TTL of {} hours is out of range",
                    self.config.session_ttl_hours
                ))
            })?;
        let session = Session {
            id: Uuid::new_v4().to_string(),
            user_id,
            created_at: now,
            expires_at,
        };

        let token = SessionClaims::for_session(&session)
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        self.repository.sessions.insert(session).await;
        Ok(token)
    }

}

/// Verify a password against a stored Argon2 hash, off the async workers
async fn verify_password(password_hash: String, password: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?
}

/// Hash a password using Argon2, off the async workers
async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(Repository::new(), AuthConfig::default())
    }

    fn bob() -> RegisterUser {
        RegisterUser {
            username: "bob".into(),
            email: "bob@x.com".into(),
            password: "pw".into(),
        }
    }

    fn creds(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let auth = service();
        let (token, user) = auth.register(bob()).await.unwrap();
        assert_eq!(user.id, 1);
        assert_ne!(user.password_hash, "pw");
        assert_eq!(auth.authenticate(&token).await.unwrap().user_id, 1);

        let (second, _) = auth.login(creds("bob@x.com", "pw")).await.unwrap();
        assert_ne!(second, token);
        // both sessions stay valid
        assert!(auth.authenticate(&token).await.is_ok());
        assert!(auth.authenticate(&second).await.is_ok());
    }

    #[tokio::test]
    async fn bad_credentials() {
        let auth = service();
        auth.register(bob()).await.unwrap();

        for (email, password) in [("bob@x.com", "wrong"), ("nobody@x.com", "pw"), ("", "")] {
            let err = auth.login(creds(email, password)).await.unwrap_err();
            assert!(matches!(err, AppError::Authentication(_)));
        }
    }

    #[tokio::test]
    async fn duplicate_registration() {
        let auth = service();
        auth.register(bob()).await.unwrap();
        let err = auth.register(bob()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let auth = service();
        let err = auth
            .register(RegisterUser {
                username: "bob".into(),
                email: String::new(),
                password: "pw".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "email is required"));
    }

    #[tokio::test]
    async fn garbage_and_foreign_tokens_fail() {
        let auth = service();
        assert!(auth.authenticate("garbage").await.is_err());

        let other = AuthService::new(
            Repository::new(),
            AuthConfig {
                jwt_secret: "other".into(),
                ..AuthConfig::default()
            },
        );
        let (token, _) = other.register(bob()).await.unwrap();
        assert!(auth.authenticate(&token).await.is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_registrations_get_distinct_ids() {
        let auth = service();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let auth = auth.clone();
                tokio::spawn(async move {
                    auth.register(RegisterUser {
                        username: format!("user{}", i),
                        email: format!("user{}@x.com", i),
                        password: "pw".into(),
                    })
                    .await
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            let (token, user) = handle.await.unwrap().unwrap();
            assert_eq!(auth.authenticate(&token).await.unwrap().user_id, user.id);
            ids.push(user.id);
        }
        ids.sort();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn out_of_range_ttl_is_an_error_not_a_panic() {
        let auth = AuthService::new(
            Repository::new(),
            AuthConfig {
                session_ttl_hours: u64::MAX,
                ..AuthConfig::default()
            },
        );
        let err = auth.register(bob()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn logout_revokes_only_that_session() {
        let auth = service();
        let (first, _) = auth.register(bob()).await.unwrap();
        let (second, _) = auth.login(creds("bob@x.com", "pw")).await.unwrap();

        let context = auth.authenticate(&first).await.unwrap();
        auth.logout(&context).await.unwrap();

        assert!(auth.authenticate(&first).await.is_err());
        assert!(auth.authenticate(&second).await.is_ok());
        assert!(auth.logout(&context).await.is_err());
    }
}
