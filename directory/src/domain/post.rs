//! Post records.

/// One post written by a directory user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    /// Post identifier shared by the post's toggle button and comment section.
    pub id: u64,
    /// Author identifier.
    pub user_id: u64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}

impl Post {
    /// Build a post record.
    pub fn new(
        id: u64,
        user_id: u64,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}
