//! Post articles with author lines, toggle buttons, and comment sections.

use tracing::debug;

use super::{ElementBuilder, POST_ID_KEY, SHOW_COMMENTS, comment_section};
use crate::dom::{Document, NodeId};
use crate::domain::ports::DirectorySource;
use crate::domain::{DirectoryClient, Post};

/// Build a fragment holding one `article` per post, in input order.
///
/// Posts are rendered one at a time: a post's author and comment fetches
/// complete before the next post starts. `None` when `posts` is absent; an
/// empty slice yields an empty fragment.
pub async fn posts_fragment<S>(
    document: &mut Document,
    client: &DirectoryClient<S>,
    posts: Option<&[Post]>,
) -> Option<NodeId>
where
    S: DirectorySource + ?Sized,
{
    let posts = posts?;
    let fragment = document.create_document_fragment();
    for post in posts {
        let article = post_article(document, client, post).await;
        document.append_child(fragment, article);
    }
    debug!(count = posts.len(), "rendered post articles");
    Some(fragment)
}

async fn post_article<S>(document: &mut Document, client: &DirectoryClient<S>, post: &Post) -> NodeId
where
    S: DirectorySource + ?Sized,
{
    let title = ElementBuilder::new("h2").text(&post.title).build(document);
    let body = ElementBuilder::default().text(&post.body).build(document);
    let post_id = ElementBuilder::default()
        .text(format!("Post ID: {}", post.id))
        .build(document);

    // An author that cannot be looked up renders like the empty user.
    let author = client.user(Some(post.user_id)).await.unwrap_or_default();
    let author_line = ElementBuilder::default()
        .text(format!(
            "Author: {} with {}",
            author.name,
            author.company_name()
        ))
        .build(document);
    let catch_phrase = ElementBuilder::default()
        .text(author.catch_phrase())
        .build(document);

    let button = ElementBuilder::new("button")
        .text(SHOW_COMMENTS)
        .build(document);
    document.set_data(button, POST_ID_KEY, post.id.to_string());

    let section = comment_section(document, client, Some(post.id)).await;

    let article = document.create_element("article");
    for child in [title, body, post_id, author_line, catch_phrase, button] {
        document.append_child(article, child);
    }
    // A post id the policy does not admit (0 by default) gets its button but
    // no comment section, so its toggle finds nothing to reveal.
    if let Some(section) = section {
        document.append_child(article, section);
    }
    article
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
