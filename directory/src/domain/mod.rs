//! Domain records, identifier rules, and the directory client.
//!
//! Purpose: define the view-models rendered by the page and the port through
//! which they are fetched. Nothing here knows about HTTP or the document
//! model.
//!
//! Public surface:
//! - User, Company, Post, Comment: transient records read from the API.
//! - ZeroIdPolicy: whether id `0` counts as absent.
//! - DirectoryClient: port wrapper that degrades failures to defaults.

mod comment;
mod directory_client;
mod id_policy;
pub mod ports;
mod post;
mod user;

pub use self::comment::Comment;
pub use self::directory_client::DirectoryClient;
pub use self::id_policy::ZeroIdPolicy;
pub use self::post::Post;
pub use self::user::{Company, User};
