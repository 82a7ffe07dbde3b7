//! Server Module
//!
//! Configuration, application state and app creation for the Axum server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Environment-backed configuration
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Store selection and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use postboard::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{AuthConfig, ConfigError, ServerConfig};
pub use init::{app_with_store, build_state, create_app, StartupError};
pub use state::AppState;
