//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory application and a request helper
//! - Authentication test helpers
//! - Database test fixtures
//! - Custom assertion macros

pub mod app;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use app::*;
pub use auth_helpers::*;
pub use database::*;
