//! JSONPlaceholder outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `DirectorySource`
//! port over the four read-only directory endpoints.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_BASE_URL, DirectoryHttpSource};
