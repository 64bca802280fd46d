//! Directory page: renderers, comment toggles, and the page controller.
//!
//! Everything here works against a [`Document`](crate::dom::Document) handed
//! in by the caller and reaches the API only through a
//! [`DirectoryClient`](crate::domain::DirectoryClient). Functions that take
//! an identifier return `None` (or [`Lookup::Skipped`]) without doing any
//! work when the identifier is not admitted.

mod comments;
mod controller;
mod display;
mod elements;
mod listeners;
mod lookup;
mod options;
mod posts;
mod toggles;

pub use self::comments::{comment_section, comments_fragment};
pub use self::controller::{InitOutcome, PageController, PageRegions, RefreshOutcome, SelectionOutcome};
pub use self::display::{delete_child_elements, display_posts};
pub use self::elements::ElementBuilder;
pub use self::listeners::ListenerManager;
pub use self::lookup::Lookup;
pub use self::options::{populate_select_menu, select_options};
pub use self::posts::posts_fragment;
pub use self::toggles::{CommentToggle, toggle_comment_button, toggle_comment_section, toggle_comments};

/// Label of a toggle button whose comments are hidden.
pub const SHOW_COMMENTS: &str = "Show Comments";
/// Label of a toggle button whose comments are shown.
pub const HIDE_COMMENTS: &str = "Hide Comments";
/// Class marking a hidden comment section.
pub const HIDDEN_CLASS: &str = "hide";
/// Class carried by every comment section.
pub const COMMENTS_CLASS: &str = "comments";
/// Data attribute key linking a post's button and comment section.
pub const POST_ID_KEY: &str = "post-id";
/// Placeholder shown when there are no posts to display.
pub const DEFAULT_TEXT: &str = "Select an Employee to display their posts.";
/// Class carried by the placeholder paragraph.
pub const DEFAULT_TEXT_CLASS: &str = "default-text";
