//! Member data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::member::{Member, RegisterMemberParams, UpdateMemberParams};

/// Repository for member rows.
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new member.
    ///
    /// Stamps `created_at` with the current time. Nickname and email uniqueness is
    /// enforced by the database; callers check first and treat a unique violation as
    /// a lost race.
    ///
    /// # Arguments
    /// - `params` - Validated registration fields
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(DbErr)` - Insert failed, including unique violations on nickname or email
    pub async fn create(&self, params: RegisterMemberParams) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            nickname: ActiveValue::Set(params.nickname),
            email: ActiveValue::Set(params.email),
            profile_image_url: ActiveValue::Set(params.profile_image_url),
            introduction: ActiveValue::Set(params.introduction),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Finds a member by ID.
    ///
    /// # Arguments
    /// - `id` - Member ID
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Finds the member holding a nickname.
    ///
    /// Matching is exact; nicknames are stored as entered after trimming.
    ///
    /// # Arguments
    /// - `nickname` - Nickname to look up
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member holding the nickname
    /// - `Ok(None)` - Nickname is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::Nickname.eq(nickname))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Finds the member registered with an email address.
    ///
    /// # Arguments
    /// - `email` - Email to look up
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member registered with the email
    /// - `Ok(None)` - Email is unused
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Applies the fields present in `params` to the member.
    ///
    /// Absent fields keep their stored value. When nothing differs from the stored row
    /// no `UPDATE` is issued and the member is returned as is.
    ///
    /// # Arguments
    /// - `params` - Member ID plus the optional nickname, image URL and introduction
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The member after the update
    /// - `Ok(None)` - No member with that ID
    /// - `Err(DbErr)` - Update failed, including a unique violation on nickname
    pub async fn update(&self, params: UpdateMemberParams) -> Result<Option<Member>, DbErr> {
        let Some(entity) = entity::prelude::Member::find_by_id(params.member_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.clone().into_active_model();
        if let Some(nickname) = params.nickname {
            active.nickname = ActiveValue::Set(nickname);
        }
        if let Some(url) = params.profile_image_url {
            active.profile_image_url = ActiveValue::Set(Some(url));
        }
        if let Some(introduction) = params.introduction {
            active.introduction = ActiveValue::Set(Some(introduction));
        }

        if !active.is_changed() {
            return Ok(Some(Member::from_entity(entity)));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Member::from_entity(updated)))
    }

    /// Deletes a member.
    ///
    /// Owned habits, checks, posts, comments and reactions are removed by the
    /// foreign key cascades.
    ///
    /// # Arguments
    /// - `id` - Member ID
    ///
    /// # Returns
    /// - `Ok(true)` - Member deleted
    /// - `Ok(false)` - No member with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
