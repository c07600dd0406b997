//! Core Module - Infrastructure of the store
//!
//! - Configuration
//! - Error handling
//! - Session provider
//! - Tracing setup

pub mod config;
pub mod db;
pub mod error;
pub mod telemetry;

pub use config::StoreSettings;
pub use db::{Database, Session};
pub use error::{StoreError, StoreResult};
pub use telemetry::init_tracing;
