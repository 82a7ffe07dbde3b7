/**
 * User Endpoint Types
 *
 * Request and response bodies for the `/user` endpoints. Field names on the
 * wire are camelCase.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{validate_email, validate_password};

/// Sign up request
///
/// `POST /user/sign-up`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignUpRequest {
    /// User's email address (must be unique)
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}

impl SignUpRequest {
    /// Apply the email and password rules
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// Sign in request
///
/// `POST /user/sign-in`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    /// Same shape rules as sign-up; checked before any lookup
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// User fields that are safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub email: String,
    pub name: Option<String>,
}

/// Body returned by a successful sign-up (201)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignUpResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Body returned by sign-in and refresh
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub message: String,
    /// Short-lived bearer token for protected routes
    pub access_token: String,
}
