use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterMemberDto {
    pub nickname: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub introduction: Option<String>,
}

/// Fields left out are not changed.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateMemberDto {
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
    pub introduction: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub nickname: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub introduction: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Returned on registration together with a bearer token for the new member.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisteredMemberDto {
    pub member: MemberDto,
    pub access_token: String,
    pub token_type: String,
}
