//! Todoist REST API client.
//!
//! # Architecture
//!
//! - `api`: the [`TodoistApi`] trait, one method per remote operation
//! - `client`: the `reqwest`-backed implementation
//! - `models`: resources (Task, Project, Section) and request payloads
//! - `error`: [`ApiError`], the only failure type leaving this module

mod api;
mod client;
mod error;
mod models;

#[cfg(test)]
pub(crate) mod fixtures;


#[cfg(test)]
pub use api::MockTodoistApi;
pub use api::TodoistApi;
pub use client::TodoistClient;
pub use error::{ApiError, ApiResult};
pub use models::*;
