//! Inbound adapters that translate document events into directory calls
//! while keeping document details at the edge.
//!
//! The directory page lives under [`page`]: renderers, toggle handlers, the
//! listener manager, and the page controller that wires them together.

pub mod page;
