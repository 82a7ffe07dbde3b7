/**
 * Auth Service
 *
 * Sign-up, sign-in and access-token refresh, independent of HTTP. Handlers
 * translate requests into calls here and map `AuthError` onto responses.
 *
 * # Flow
 *
 * 1. **Sign-up**: validate → bcrypt hash → insert user → public fields
 * 2. **Sign-in**: validate → lookup by email → bcrypt verify → access (1h) + refresh (24h) tokens
 *    (an unknown email is verified against a placeholder hash so it costs the
 *    same bcrypt work as a wrong password)
 * 3. **Refresh**: verify refresh token with the refresh secret → new access token
 *
 * The refresh token is not rotated on refresh and is not tracked server-side;
 * it stays usable until its own expiry.
 */

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::backend::auth::passwords::{hash_password, verify_password};
use crate::backend::auth::tokens::{
    self, TokenError, TokenUser, ACCESS_TOKEN_TTL_SECS, REFRESH_TOKEN_TTL_SECS,
};
use crate::backend::auth::users::{NewUser, User, UserRepository};
use crate::backend::error::BackendError;
use crate::backend::server::config::AuthConfig;
use crate::backend::store::RepositoryError;
use crate::shared::{SharedError, SignInRequest, SignUpRequest};

/// Failures of the auth flow
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Unknown email or wrong password; callers cannot tell which
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email is already registered")]
    EmailTaken,

    /// No refresh token was presented
    #[error("refresh token is missing")]
    MissingToken,

    /// Refresh token failed signature or expiry checks
    #[error("refresh token is invalid: {0}")]
    InvalidToken(#[source] TokenError),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token signing failed: {0}")]
    Signing(#[source] TokenError),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<AuthError> for BackendError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(e) => BackendError::Validation(e),
            AuthError::InvalidCredentials => BackendError::InvalidCredentials,
            AuthError::EmailTaken => BackendError::Conflict("email is already registered".into()),
            AuthError::MissingToken => BackendError::missing_token("Refresh token is missing"),
            AuthError::InvalidToken(_) => BackendError::invalid_token("Refresh token is invalid"),
            other => BackendError::internal(other.to_string()),
        }
    }
}

/// Tokens handed out by a successful sign-in
#[derive(Debug, Clone)]
pub struct SignInTokens {
    /// Returned in the response body
    pub access_token: String,
    /// Set as the refresh cookie
    pub refresh_token: String,
}

/// Input for the placeholder hash checked when the email is unknown
const PLACEHOLDER_PASSWORD: &str = "postboard-placeholder-password";

/// Sign-up / sign-in / refresh against a user repository
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    config: Arc<AuthConfig>,
    /// Hashed at the configured cost on first use
    placeholder_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, config: Arc<AuthConfig>) -> Self {
        Self {
            users,
            config,
            placeholder_hash: Arc::new(OnceCell::new()),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `Validation` - bad email, or a password shorter than 6 characters or longer than 72 bytes
    /// * `EmailTaken` - the email already has an account
    /// * `Hashing` / `Repository` - infrastructure failures
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<User, AuthError> {
        request.validate()?;

        let SignUpRequest {
            email,
            password,
            name,
        } = request;

        let password_hash = self.hash(password).await?;

        let user = self
            .users
            .create(NewUser {
                email,
                name,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        tracing::info!("User registered: {} (id {})", user.email, user.id);
        Ok(user)
    }

    /// Check credentials and issue an access/refresh token pair
    ///
    /// An unknown email and a wrong password both yield `InvalidCredentials`.
    pub async fn sign_in(&self, request: SignInRequest) -> Result<SignInTokens, AuthError> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await
            .map_err(AuthError::Repository)?;

        let Some(user) = user else {
            tracing::warn!("Sign-in for unknown email: {}", request.email);
            let placeholder = self.placeholder_hash().await?;
            // Result ignored: the outcome is InvalidCredentials either way
            let _ = self.verify(request.password, placeholder).await;
            return Err(AuthError::InvalidCredentials);
        };

        let valid = self
            .verify(request.password, user.password_hash.clone())
            .await?;

        if !valid {
            tracing::warn!("Invalid password for user: {}", user.email);
            return Err(AuthError::InvalidCredentials);
        }

        let identity = TokenUser {
            id: user.id,
            email: user.email.clone(),
        };
        let access_token = tokens::issue(&identity, &self.config.access_secret, ACCESS_TOKEN_TTL_SECS)
            .map_err(AuthError::Signing)?;
        let refresh_token =
            tokens::issue(&identity, &self.config.refresh_secret, REFRESH_TOKEN_TTL_SECS)
                .map_err(AuthError::Signing)?;

        tracing::info!("User signed in: {} (id {})", user.email, user.id);
        Ok(SignInTokens {
            access_token,
            refresh_token,
        })
    }

    async fn hash(&self, password: String) -> Result<String, AuthError> {
        let cost = self.config.bcrypt_cost;
        tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    async fn verify(&self, password: String, password_hash: String) -> Result<bool, AuthError> {
        tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    async fn placeholder_hash(&self) -> Result<String, AuthError> {
        self.placeholder_hash
            .get_or_try_init(|| self.hash(PLACEHOLDER_PASSWORD.to_string()))
            .await
            .cloned()
    }

    /// Mint a new access token from a refresh token
    pub fn refresh(&self, refresh_token: Option<&str>) -> Result<String, AuthError> {
        let token = refresh_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = tokens::verify(token, &self.config.refresh_secret).map_err(|e| {
            tracing::warn!("Refresh token rejected: {}", e);
            AuthError::InvalidToken(e)
        })?;

        let access_token =
            tokens::issue(&claims.user, &self.config.access_secret, ACCESS_TOKEN_TTL_SECS)
                .map_err(AuthError::Signing)?;

        tracing::info!("Access token refreshed for user id {}", claims.user.id);
        Ok(access_token)
    }
}
