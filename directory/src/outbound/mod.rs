//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between wire representations and domain
//! records. They contain no page logic and never decide how a failure
//! degrades.

pub mod jsonplaceholder;
