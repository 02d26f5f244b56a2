//! # Roaster Core
//!
//! Core logic for the todo roaster.
//!
//! This crate contains everything that is not an API concern:
//! - Todo collection with the type-state [`Collector`]
//! - The write-once/read-once [`Handoff`] between collecting and roasting
//! - Batch roast generation with per-item fallback ([`RoastService`])
//! - Results view state, reactions and export formats
//!
//! **No API concerns**: HTTP servers and command-line handling belong in `api-rest` and
//! `roaster-cli`.

pub mod collector;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod handoff;
pub mod provider;
pub mod results;
pub mod roast;

pub use collector::{Collector, Editing, Submitted};
pub use config::CoreConfig;
pub use constants::*;
pub use error::{RoastError, RoastResult};
pub use handoff::Handoff;
pub use provider::RoastProvider;
pub use results::{ResultsView, RoastBatch, RoastCard, RoastEntry, ViewStatus};
pub use roast::{prompt_for, todos_from_body, RoastService};
pub use roaster_types::{NonEmptyText, Todo};
