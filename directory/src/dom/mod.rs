//! In-memory document model hosting the directory page.
//!
//! The page logic is written against this model the way browser code is
//! written against the DOM: element creation, attributes and class lists,
//! fragments, selector queries, and event listeners removed by reference
//! identity. It has no dependency on the rest of the crate.

mod document;
mod events;
mod html;
mod selector;

pub use document::{Document, NodeId};
pub use events::{Event, EventKind, Listener, listener, same_listener};
pub use selector::Selector;
