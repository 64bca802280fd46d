//! DTOs for decoding JSONPlaceholder responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records in one pass. Fields the page never renders are ignored.

use serde::Deserialize;

use crate::domain::{Comment, Company, Post, User};

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    #[serde(default)]
    pub(super) name: String,
    #[serde(default)]
    pub(super) company: Option<CompanyDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompanyDto {
    #[serde(default)]
    pub(super) name: String,
    #[serde(rename = "catchPhrase", default)]
    pub(super) catch_phrase: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostDto {
    pub(super) id: u64,
    pub(super) user_id: u64,
    #[serde(default)]
    pub(super) title: String,
    #[serde(default)]
    pub(super) body: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CommentDto {
    pub(super) post_id: u64,
    pub(super) id: u64,
    #[serde(default)]
    pub(super) name: String,
    #[serde(default)]
    pub(super) email: String,
    #[serde(default)]
    pub(super) body: String,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            company: dto.company.map(|company| Company {
                name: company.name,
                catch_phrase: company.catch_phrase,
            }),
        }
    }
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Self::new(dto.id, dto.user_id, dto.title, dto.body)
    }
}

impl From<CommentDto> for Comment {
    fn from(dto: CommentDto) -> Self {
        Self::new(dto.post_id, dto.id, dto.name, dto.email, dto.body)
    }
}
