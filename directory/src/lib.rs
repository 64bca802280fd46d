//! Employee directory library modules.
//!
//! A select menu of users drives fetching and rendering that user's posts,
//! each with a hidden, toggleable comment section. The page is hosted in the
//! crate's own document model ([`dom`]); data comes through the
//! [`domain::ports::DirectorySource`] port.

pub mod dom;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

pub use settings::DirectorySettings;
