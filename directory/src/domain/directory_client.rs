//! Directory client: the four page-facing fetches.
//!
//! Each fetch admits its identifier through the configured
//! [`ZeroIdPolicy`] before touching the port, and converts every port error
//! into a safe default after logging it. Callers never see an error:
//! list-shaped fetches degrade to an empty list and the single-user lookup
//! degrades to [`User::default()`].

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::ports::{DirectorySource, DirectorySourceError};
use crate::domain::{Comment, Post, User, ZeroIdPolicy};

fn log_degraded(endpoint: &'static str, id: Option<u64>, err: &DirectorySourceError) {
    error!(endpoint, id, error = %err, "directory fetch failed; using empty default");
}

/// Page-facing wrapper over a [`DirectorySource`].
pub struct DirectoryClient<S: ?Sized> {
    source: Arc<S>,
    policy: ZeroIdPolicy,
}

impl<S: ?Sized> Clone for DirectoryClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            policy: self.policy,
        }
    }
}

impl<S: ?Sized> DirectoryClient<S> {
    /// Wrap a source using the default id policy.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            policy: ZeroIdPolicy::default(),
        }
    }

    /// Replace the id policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ZeroIdPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Id policy applied by every identifier-keyed fetch.
    pub const fn policy(&self) -> ZeroIdPolicy {
        self.policy
    }
}

impl<S> DirectoryClient<S>
where
    S: DirectorySource + ?Sized,
{
    /// Fetch every user, or an empty list on failure.
    pub async fn users(&self) -> Vec<User> {
        match self.source.list_users().await {
            Ok(users) => {
                debug!(count = users.len(), "fetched users");
                users
            }
            Err(err) => {
                log_degraded("users", None, &err);
                Vec::new()
            }
        }
    }

    /// Fetch one user.
    ///
    /// `None` when the id is not admitted; the empty user on failure.
    pub async fn user(&self, user_id: Option<u64>) -> Option<User> {
        let user_id = self.policy.admit(user_id)?;
        let user = match self.source.find_user(user_id).await {
            Ok(user) => user,
            Err(err) => {
                log_degraded("user", Some(user_id), &err);
                User::default()
            }
        };
        Some(user)
    }

    /// Fetch the posts of one user.
    ///
    /// `None` when the id is not admitted; an empty list on failure.
    pub async fn user_posts(&self, user_id: Option<u64>) -> Option<Vec<Post>> {
        let user_id = self.policy.admit(user_id)?;
        let posts = match self.source.list_user_posts(user_id).await {
            Ok(posts) => {
                debug!(user_id, count = posts.len(), "fetched user posts");
                posts
            }
            Err(err) => {
                log_degraded("posts", Some(user_id), &err);
                Vec::new()
            }
        };
        Some(posts)
    }

    /// Fetch the comments of one post.
    ///
    /// `None` when the id is not admitted; an empty list on failure.
    pub async fn post_comments(&self, post_id: Option<u64>) -> Option<Vec<Comment>> {
        let post_id = self.policy.admit(post_id)?;
        let comments = match self.source.list_post_comments(post_id).await {
            Ok(comments) => comments,
            Err(err) => {
                log_degraded("comments", Some(post_id), &err);
                Vec::new()
            }
        };
        Some(comments)
    }
}

#[cfg(test)]
#[path = "directory_client_tests.rs"]
mod tests;
