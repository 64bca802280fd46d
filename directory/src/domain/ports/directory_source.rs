//! Driven port for reading users, posts, and comments from the directory API.
//!
//! Adapters report failures through [`DirectorySourceError`]; deciding what a
//! failure degrades to is the domain's job, not the adapter's.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Comment, Company, Post, User};

define_port_error! {
    /// Errors surfaced while calling the directory API.
    pub enum DirectorySourceError {
        /// Network transport failed before a response arrived.
        Transport {
            /// Transport failure detail.
            message: String,
        } => "directory transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout {
            /// Timeout detail.
            message: String,
        } => "directory request timed out: {message}",
        /// The API answered with a non-success status.
        Status {
            /// HTTP status code.
            status: u16,
            /// Response body preview or reason.
            message: String,
        } => "directory returned status {status}: {message}",
        /// The response body was not the expected JSON shape.
        Decode {
            /// Decoder failure detail.
            message: String,
        } => "directory response decode failed: {message}",
    }
}

/// Port for the four read-only directory endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch every user.
    async fn list_users(&self) -> Result<Vec<User>, DirectorySourceError>;

    /// Fetch one user by id.
    async fn find_user(&self, user_id: u64) -> Result<User, DirectorySourceError>;

    /// Fetch the posts written by one user.
    async fn list_user_posts(&self, user_id: u64) -> Result<Vec<Post>, DirectorySourceError>;

    /// Fetch the comments attached to one post.
    async fn list_post_comments(&self, post_id: u64)
    -> Result<Vec<Comment>, DirectorySourceError>;
}

/// Fixture implementation answering from an in-memory dataset.
///
/// # Examples
///
/// ```rust,ignore
/// use employee_directory::domain::ports::{DirectorySource, FixtureDirectorySource};
///
/// let source = FixtureDirectorySource::sample();
/// let posts = source.list_user_posts(1).await?;
/// assert!(posts.iter().all(|post| post.user_id == 1));
/// # Ok::<(), employee_directory::domain::ports::DirectorySourceError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureDirectorySource {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl FixtureDirectorySource {
    /// Build a fixture over explicit records.
    #[must_use]
    pub const fn new(users: Vec<User>, posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self {
            users,
            posts,
            comments,
        }
    }

    /// A small built-in dataset: three users, two posts each, and two
    /// comments per post.
    #[must_use]
    pub fn sample() -> Self {
        let users = vec![
            User::new(1, "Leanne Graham").with_company(Company::new(
                "Romaguera-Crona",
                "Multi-layered client-server neural-net",
            )),
            User::new(2, "Ervin Howell").with_company(Company::new(
                "Deckow-Crist",
                "Proactive didactic contingency",
            )),
            User::new(3, "Clementine Bauch").with_company(Company::new(
                "Romaguera-Jacobson",
                "Face to face bifurcated interface",
            )),
        ];
        let posts: Vec<Post> = users
            .iter()
            .flat_map(|user| {
                (1..=2).map(move |offset| {
                    let id = (user.id - 1) * 2 + offset;
                    Post::new(
                        id,
                        user.id,
                        format!("Post {id} by {}", user.name),
                        format!("Body of post {id}."),
                    )
                })
            })
            .collect();
        let comments = posts
            .iter()
            .flat_map(|post| {
                (1..=2).map(move |offset| {
                    let id = (post.id - 1) * 2 + offset;
                    Comment::new(
                        post.id,
                        id,
                        format!("Comment {id}"),
                        format!("reader{id}@example.com"),
                        format!("Reply {offset} to post {}.", post.id),
                    )
                })
            })
            .collect();
        Self::new(users, posts, comments)
    }
}

#[async_trait]
impl DirectorySource for FixtureDirectorySource {
    async fn list_users(&self) -> Result<Vec<User>, DirectorySourceError> {
        Ok(self.users.clone())
    }

    async fn find_user(&self, user_id: u64) -> Result<User, DirectorySourceError> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or_else(|| DirectorySourceError::status(404_u16, format!("user {user_id} not found")))
    }

    async fn list_user_posts(&self, user_id: u64) -> Result<Vec<Post>, DirectorySourceError> {
        Ok(self
            .posts
            .iter()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_post_comments(
        &self,
        post_id: u64,
    ) -> Result<Vec<Comment>, DirectorySourceError> {
        Ok(self
            .comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    //! Fixture source behaviour.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn source() -> FixtureDirectorySource {
        FixtureDirectorySource::sample()
    }

    #[rstest]
    #[tokio::test]
    async fn filters_posts_by_author(source: FixtureDirectorySource) {
        let posts = source.list_user_posts(2).await.expect("fixture posts");
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|post| post.user_id == 2));
        assert_eq!(
            posts.iter().map(|post| post.id).collect::<Vec<_>>(),
            vec![3, 4]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn filters_comments_by_post(source: FixtureDirectorySource) {
        let comments = source.list_post_comments(3).await.expect("fixture comments");
        assert_eq!(comments.len(), 2);
        assert!(comments.iter().all(|comment| comment.post_id == 3));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_users_report_not_found_status(source: FixtureDirectorySource) {
        let error = source.find_user(99).await.expect_err("unknown user");
        assert!(
            matches!(error, DirectorySourceError::Status { status: 404, .. }),
            "unknown users should map to a 404 status, got {error}"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_authors_have_no_posts(source: FixtureDirectorySource) {
        let posts = source.list_user_posts(42).await.expect("fixture posts");
        assert!(posts.is_empty());
    }
}
