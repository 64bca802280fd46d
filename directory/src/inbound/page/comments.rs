//! Comment fragments and the hidden per-post comment section.

use super::{COMMENTS_CLASS, ElementBuilder, HIDDEN_CLASS, POST_ID_KEY};
use crate::dom::{Document, NodeId};
use crate::domain::ports::DirectorySource;
use crate::domain::{Comment, DirectoryClient};

/// Build a fragment holding one `article` per comment.
///
/// Each article holds an `h3` name, a body paragraph, and a `From: <email>`
/// paragraph. `None` when `comments` is absent; an empty slice yields an
/// empty fragment.
pub fn comments_fragment(document: &mut Document, comments: Option<&[Comment]>) -> Option<NodeId> {
    let comments = comments?;
    let fragment = document.create_document_fragment();
    for comment in comments {
        let article = document.create_element("article");
        let heading = ElementBuilder::new("h3").text(&comment.name).build(document);
        let body = ElementBuilder::default().text(&comment.body).build(document);
        let email = ElementBuilder::default()
            .text(format!("From: {}", comment.email))
            .build(document);
        for child in [heading, body, email] {
            document.append_child(article, child);
        }
        document.append_child(fragment, article);
    }
    Some(fragment)
}

/// Build the hidden comment section for one post.
///
/// The section carries `data-post-id` and the `comments hide` classes and is
/// returned whatever the comment fetch yields. `None`, without fetching, when
/// the post id is not admitted by the client's id policy.
pub async fn comment_section<S>(
    document: &mut Document,
    client: &DirectoryClient<S>,
    post_id: Option<u64>,
) -> Option<NodeId>
where
    S: DirectorySource + ?Sized,
{
    let post_id = client.policy().admit(post_id)?;
    let section = document.create_element("section");
    document.set_data(section, POST_ID_KEY, post_id.to_string());
    document.add_class(section, COMMENTS_CLASS);
    document.add_class(section, HIDDEN_CLASS);

    let comments = client.post_comments(Some(post_id)).await;
    if let Some(fragment) = comments_fragment(document, comments.as_deref()) {
        document.append_child(section, fragment);
    }
    Some(section)
}
