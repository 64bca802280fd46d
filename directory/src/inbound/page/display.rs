//! Rendering into the `main` region.

use super::{DEFAULT_TEXT, DEFAULT_TEXT_CLASS, ElementBuilder, posts_fragment};
use crate::dom::{Document, NodeId};
use crate::domain::ports::DirectorySource;
use crate::domain::{DirectoryClient, Post};

/// Append the rendered posts, or the default-text placeholder, to `main`.
///
/// Absent or empty posts render the placeholder paragraph. Returns the
/// appended node (a fragment is emptied by the append), or `None` when the
/// page has no main region.
pub async fn display_posts<S>(
    document: &mut Document,
    client: &DirectoryClient<S>,
    main: Option<NodeId>,
    posts: Option<&[Post]>,
) -> Option<NodeId>
where
    S: DirectorySource + ?Sized,
{
    let main = main?;
    let element = match posts.filter(|posts| !posts.is_empty()) {
        Some(posts) => posts_fragment(document, client, Some(posts)).await?,
        None => ElementBuilder::default()
            .text(DEFAULT_TEXT)
            .class_name(DEFAULT_TEXT_CLASS)
            .build(document),
    };
    document.append_child(main, element);
    Some(element)
}

/// Remove every element child of `parent`.
///
/// Returns `parent`, or `None` when it is absent or not an element.
pub fn delete_child_elements(document: &mut Document, parent: Option<NodeId>) -> Option<NodeId> {
    let parent = parent.filter(|parent| document.is_element(*parent))?;
    document.remove_element_children(parent);
    Some(parent)
}
