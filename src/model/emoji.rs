use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEmojiDto {
    /// Reaction marker such as `LIKE`; stored upper-cased.
    pub kind: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmojiDto {
    pub id: i32,
    pub post_id: i32,
    pub member_id: i32,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}
