//! Reqwest-backed directory source adapter.
//!
//! This adapter owns transport details only: endpoint layout, optional
//! request timeout, HTTP error mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{CommentDto, PostDto, UserDto};
use crate::domain::ports::{DirectorySource, DirectorySourceError};
use crate::domain::{Comment, Post, User};

/// Public JSONPlaceholder API root.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";
const DEFAULT_USER_AGENT: &str = "employee-directory/0.1";

/// Directory source that performs HTTP GET requests against one API root.
pub struct DirectoryHttpSource {
    client: Client,
    base_url: Url,
}

impl DirectoryHttpSource {
    /// Build an adapter; requests time out only when `timeout` is set.
    /// ```rust,ignore
    /// let source = DirectoryHttpSource::new(base_url, None);
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url))
    }

    /// Build an adapter around an existing reqwest client.
    #[must_use]
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url: with_trailing_slash(base_url),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, DirectorySourceError> {
        debug!(url = %url, "requesting directory endpoint");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        decode(body.as_ref())
    }
}

#[async_trait]
impl DirectorySource for DirectoryHttpSource {
    async fn list_users(&self) -> Result<Vec<User>, DirectorySourceError> {
        let url = endpoint(&self.base_url, "users", None)?;
        let users: Vec<UserDto> = self.get_json(url).await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn find_user(&self, user_id: u64) -> Result<User, DirectorySourceError> {
        let url = endpoint(&self.base_url, &format!("users/{user_id}"), None)?;
        let user: UserDto = self.get_json(url).await?;
        Ok(User::from(user))
    }

    async fn list_user_posts(&self, user_id: u64) -> Result<Vec<Post>, DirectorySourceError> {
        let url = endpoint(&self.base_url, "posts", Some(("userId", user_id)))?;
        let posts: Vec<PostDto> = self.get_json(url).await?;
        Ok(posts.into_iter().map(Post::from).collect())
    }

    async fn list_post_comments(
        &self,
        post_id: u64,
    ) -> Result<Vec<Comment>, DirectorySourceError> {
        let url = endpoint(&self.base_url, "comments", Some(("postId", post_id)))?;
        let comments: Vec<CommentDto> = self.get_json(url).await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn endpoint(
    base_url: &Url,
    path: &str,
    query: Option<(&str, u64)>,
) -> Result<Url, DirectorySourceError> {
    let mut url = base_url.join(path).map_err(|error| {
        DirectorySourceError::transport(format!("invalid endpoint `{path}`: {error}"))
    })?;
    if let Some((key, value)) = query {
        url.query_pairs_mut().append_pair(key, &value.to_string());
    }
    Ok(url)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DirectorySourceError> {
    serde_json::from_slice(body).map_err(|error| {
        DirectorySourceError::decode(format!("invalid directory JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> DirectorySourceError {
    if error.is_timeout() {
        DirectorySourceError::timeout(error.to_string())
    } else {
        DirectorySourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> DirectorySourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        body_preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            DirectorySourceError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => DirectorySourceError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
#[path = "http_source_tests.rs"]
mod tests;
