//! Emoji reaction domain model.

use chrono::{DateTime, Utc};

use crate::{model::emoji::EmojiDto, server::error::AppError};

const MAX_KIND_CHARS: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Emoji {
    pub id: i32,
    pub post_id: i32,
    pub member_id: i32,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl Emoji {
    pub fn from_entity(entity: entity::emoji::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            member_id: entity.member_id,
            kind: entity.kind,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> EmojiDto {
        EmojiDto {
            id: self.id,
            post_id: self.post_id,
            member_id: self.member_id,
            kind: self.kind,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddEmojiParams {
    pub member_id: i32,
    pub post_id: i32,
    pub kind: String,
}

impl AddEmojiParams {
    /// Trims and upper-cases `kind`, rejecting blank or overlong markers.
    pub fn new(member_id: i32, post_id: i32, kind: &str) -> Result<Self, AppError> {
        let kind = kind.trim().to_uppercase();
        let len = kind.chars().count();

        if len == 0 || len > MAX_KIND_CHARS {
            return Err(AppError::BadRequest(format!(
                "Emoji kind must be 1 to {} characters",
                MAX_KIND_CHARS
            )));
        }

        Ok(Self {
            member_id,
            post_id,
            kind,
        })
    }
}
