//! Comment records.

/// One comment attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Post the comment belongs to.
    pub post_id: u64,
    /// Comment identifier.
    pub id: u64,
    /// Comment title, rendered as the heading.
    pub name: String,
    /// Commenter e-mail address.
    pub email: String,
    /// Comment text.
    pub body: String,
}

impl Comment {
    /// Build a comment record.
    pub fn new(
        post_id: u64,
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            post_id,
            id,
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }
}
