//! Authentication Module
//!
//! Account registration, sign-in and access-token refresh.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports and documentation
//! ├── tokens.rs     - Signed token codec (issue / verify)
//! ├── passwords.rs  - bcrypt hashing
//! ├── users.rs      - User model and `UserRepository`
//! ├── service.rs    - `AuthService`: sign-up, sign-in, refresh
//! └── handlers/     - `/user` HTTP handlers
//!     ├── mod.rs
//!     ├── cookie.rs   - Refresh token cookie
//!     ├── signup.rs   - POST /user/sign-up
//!     ├── signin.rs   - POST /user/sign-in
//!     └── refresh.rs  - GET /user/refresh
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign-up**: email + password → user created → public fields returned
//! 2. **Sign-in**: credentials verified → access token in body, refresh token in cookie
//! 3. **Refresh**: refresh cookie verified → new access token in body
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Access and refresh tokens are signed with different secrets
//! - Access tokens live 1 hour, refresh tokens 24 hours
//! - Unknown email and wrong password produce the same 400 response
//! - The refresh cookie is `HttpOnly` and `SameSite=Strict`

/// Signed token codec
pub mod tokens;

/// Password hashing
pub mod passwords;

/// User data model and repository trait
pub mod users;

/// Sign-up, sign-in and refresh logic
pub mod service;

/// HTTP handlers for the `/user` endpoints
pub mod handlers;

pub use handlers::{refresh_token, sign_in, sign_up, REFRESH_TOKEN_COOKIE};
pub use service::{AuthError, AuthService, SignInTokens};
pub use tokens::{Claims, TokenError, TokenUser};
pub use users::{NewUser, User, UserRepository};
