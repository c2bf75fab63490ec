//! Member domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::member::{MemberDto, RegisterMemberDto, UpdateMemberDto},
    server::error::AppError,
};

const MAX_NICKNAME_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub nickname: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub introduction: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            nickname: entity.nickname,
            email: entity.email,
            profile_image_url: entity.profile_image_url,
            introduction: entity.introduction,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            nickname: self.nickname,
            email: self.email,
            profile_image_url: self.profile_image_url,
            introduction: self.introduction,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterMemberParams {
    pub nickname: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub introduction: Option<String>,
}

impl RegisterMemberParams {
    pub fn from_dto(dto: RegisterMemberDto) -> Result<Self, AppError> {
        let email = dto.email.trim().to_lowercase();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a valid email address",
                dto.email
            )));
        }

        Ok(Self {
            nickname: validate_nickname(&dto.nickname)?,
            email,
            profile_image_url: dto.profile_image_url,
            introduction: dto.introduction,
        })
    }
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateMemberParams {
    pub member_id: i32,
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
    pub introduction: Option<String>,
}

impl UpdateMemberParams {
    pub fn from_dto(member_id: i32, dto: UpdateMemberDto) -> Result<Self, AppError> {
        Ok(Self {
            member_id,
            nickname: dto.nickname.as_deref().map(validate_nickname).transpose()?,
            profile_image_url: dto.profile_image_url,
            introduction: dto.introduction,
        })
    }
}

fn validate_nickname(nickname: &str) -> Result<String, AppError> {
    let nickname = nickname.trim();

    if nickname.is_empty() {
        return Err(AppError::BadRequest("Nickname must not be blank".to_string()));
    }
    if nickname.chars().count() > MAX_NICKNAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Nickname must be at most {} characters",
            MAX_NICKNAME_LEN
        )));
    }

    Ok(nickname.to_string())
}
