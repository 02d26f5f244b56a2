//! # API Shared
//!
//! Shared utilities and definitions for the roaster APIs.
//!
//! Contains:
//! - Wire types for the roast endpoint (`wire` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` on the server side and by `roaster-cli` when it talks to a running server.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
