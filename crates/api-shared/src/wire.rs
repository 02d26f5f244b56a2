//! JSON bodies exchanged over `POST /api/roast` and `GET /health`.
//!
//! Field names are part of the public contract with existing clients: `todos` in, `roasts` out,
//! `error` on failure.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned with HTTP 400 when `todos` is missing, not an array, or empty.
pub const NO_TODOS_PROVIDED: &str = "No todos provided";

/// Message returned with HTTP 500 when the batch could not be processed at all.
pub const FAILED_TO_GENERATE: &str = "Failed to generate roasts";

/// Request body for the roast endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoastReq {
    /// Ordered todo texts, one roast is produced per entry.
    pub todos: Vec<String>,
}

/// Successful response: `roasts[i]` belongs to `todos[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoastRes {
    pub roasts: Vec<String>,
}

/// Error body for 4xx and 5xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn no_todos() -> Self {
        Self {
            error: NO_TODOS_PROVIDED.into(),
        }
    }

    pub fn generation_failed() -> Self {
        Self {
            error: FAILED_TO_GENERATE.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
