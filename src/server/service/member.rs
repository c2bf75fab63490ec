use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::member::MemberRepository,
    error::{is_unique_violation, member::MemberError, AppError},
    model::member::{Member, RegisterMemberParams, UpdateMemberParams},
};

/// Service for member registration and profiles.
pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    /// Creates a new MemberService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MemberService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a member with a unique nickname and email.
    ///
    /// Both are checked inside the insert transaction. When a concurrent registration
    /// claims either value between the check and the insert, the unique index rejects
    /// the row and the taken field is looked up again to report it.
    ///
    /// # Arguments
    /// - `params` - Validated nickname, email and optional profile fields
    ///
    /// # Returns
    /// - `Ok(Member)` - The registered member
    /// - `Err(AppError::MemberErr(DuplicateNickname))` - Nickname already taken
    /// - `Err(AppError::MemberErr(DuplicateEmail))` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterMemberParams) -> Result<Member, AppError> {
        let txn = self.db.begin().await?;
        let repo = MemberRepository::new(&txn);

        if repo.find_by_nickname(&params.nickname).await?.is_some() {
            return Err(MemberError::DuplicateNickname(params.nickname).into());
        }
        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(MemberError::DuplicateEmail(params.email).into());
        }

        let (nickname, email) = (params.nickname.clone(), params.email.clone());
        let member = match repo.create(params).await {
            Ok(member) => member,
            Err(err) if is_unique_violation(&err) => {
                txn.rollback().await?;
                return Err(self.registration_conflict(nickname, email).await?);
            }
            Err(err) => return Err(err.into()),
        };

        txn.commit().await?;

        tracing::info!("Registered member {} ({})", member.id, member.nickname);

        Ok(member)
    }

    /// Names the field a concurrent registration claimed first.
    ///
    /// Called after the insert hit a unique index, outside the failed transaction
    /// so the winning row is visible.
    ///
    /// # Arguments
    /// - `nickname` - Nickname the rejected registration asked for
    /// - `email` - Email the rejected registration asked for
    ///
    /// # Returns
    /// - `Ok(AppError)` - `DuplicateNickname` or `DuplicateEmail` for the taken field, or a
    ///   plain `Conflict` when the winning row is already gone
    /// - `Err(DbErr)` - Database error during lookup
    async fn registration_conflict(&self, nickname: String, email: String) -> Result<AppError, DbErr> {
        let repo = MemberRepository::new(self.db);

        if repo.find_by_nickname(&nickname).await?.is_some() {
            return Ok(MemberError::DuplicateNickname(nickname).into());
        }
        if repo.find_by_email(&email).await?.is_some() {
            return Ok(MemberError::DuplicateEmail(email).into());
        }

        Ok(AppError::Conflict(
            "Nickname or email was registered concurrently".to_string(),
        ))
    }

    /// Loads a member's profile.
    ///
    /// # Arguments
    /// - `member_id` - Member ID
    ///
    /// # Returns
    /// - `Ok(Member)` - The member
    /// - `Err(AppError::MemberErr(NotFound))` - No member with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, member_id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| MemberError::NotFound(member_id).into())
    }

    /// Updates the profile fields present in `params`.
    ///
    /// A nickname held by another member is rejected; resubmitting one's own
    /// nickname succeeds without change.
    ///
    /// # Arguments
    /// - `params` - Member ID plus the optional nickname, image URL and introduction
    ///
    /// # Returns
    /// - `Ok(Member)` - The member after the update
    /// - `Err(AppError::MemberErr(NotFound))` - No member with that ID
    /// - `Err(AppError::MemberErr(DuplicateNickname))` - Nickname held by another member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateMemberParams) -> Result<Member, AppError> {
        let member_id = params.member_id;
        let txn = self.db.begin().await?;
        let repo = MemberRepository::new(&txn);

        if repo.find_by_id(member_id).await?.is_none() {
            return Err(MemberError::NotFound(member_id).into());
        }

        if let Some(nickname) = &params.nickname {
            if let Some(holder) = repo.find_by_nickname(nickname).await? {
                if holder.id != member_id {
                    return Err(MemberError::DuplicateNickname(nickname.clone()).into());
                }
            }
        }

        let nickname = params.nickname.clone();
        let updated = match repo.update(params).await {
            Ok(updated) => updated,
            Err(err) if is_unique_violation(&err) => {
                return Err(MemberError::DuplicateNickname(nickname.unwrap_or_default()).into())
            }
            Err(err) => return Err(err.into()),
        }
        .ok_or(MemberError::NotFound(member_id))?;

        txn.commit().await?;

        tracing::info!("Updated profile of member {}", member_id);

        Ok(updated)
    }

    /// Deletes a member and everything they own.
    ///
    /// # Arguments
    /// - `member_id` - Member ID
    ///
    /// # Returns
    /// - `Ok(())` - Member deleted
    /// - `Err(AppError::MemberErr(NotFound))` - No member with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, member_id: i32) -> Result<(), AppError> {
        if !MemberRepository::new(self.db).delete(member_id).await? {
            return Err(MemberError::NotFound(member_id).into());
        }

        tracing::info!("Deleted member {}", member_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::member::{RegisterMemberDto, UpdateMemberDto};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory};

    fn rename(member_id: i32, nickname: &str) -> UpdateMemberParams {
        UpdateMemberParams::from_dto(
            member_id,
            UpdateMemberDto {
                nickname: Some(nickname.to_string()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn registers_member() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let params = RegisterMemberParams::from_dto(RegisterMemberDto {
            nickname: "early_bird".to_string(),
            email: "bird@habiters.test".to_string(),
            profile_image_url: None,
            introduction: Some("Morning person".to_string()),
        })?;
        let member = MemberService::new(db).register(params).await?;

        assert_eq!(member.nickname, "early_bird");
        assert_eq!(member.introduction.as_deref(), Some("Morning person"));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_registration_with_taken_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let existing = factory::create_member(db).await?;

        let params = RegisterMemberParams::from_dto(RegisterMemberDto {
            nickname: "someone_else".to_string(),
            email: existing.email.clone(),
            profile_image_url: None,
            introduction: None,
        })?;
        let result = MemberService::new(db).register(params).await;

        assert!(matches!(
            result,
            Err(AppError::MemberErr(MemberError::DuplicateEmail(email))) if email == existing.email
        ));

        Ok(())
    }

    #[tokio::test]
    async fn conflicting_insert_reports_the_field_that_was_taken() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let winner = factory::member::MemberFactory::new(db)
            .nickname("winner")
            .build()
            .await?;
        let service = MemberService::new(db);

        let by_email = service
            .registration_conflict("loser".to_string(), winner.email.clone())
            .await?;
        let by_nickname = service
            .registration_conflict("winner".to_string(), "loser@habiters.test".to_string())
            .await?;
        let vanished = service
            .registration_conflict("loser".to_string(), "loser@habiters.test".to_string())
            .await?;

        assert!(matches!(
            by_email,
            AppError::MemberErr(MemberError::DuplicateEmail(email)) if email == winner.email
        ));
        assert!(matches!(
            by_nickname,
            AppError::MemberErr(MemberError::DuplicateNickname(nickname)) if nickname == "winner"
        ));
        assert!(matches!(vanished, AppError::Conflict(_)));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_nickname_held_by_another_member() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let holder = factory::member::MemberFactory::new(db)
            .nickname("taken")
            .build()
            .await?;
        let member = factory::member::MemberFactory::new(db)
            .nickname("original")
            .build()
            .await?;
        let service = MemberService::new(db);

        let result = service.update(rename(member.id, "taken")).await;

        assert!(matches!(
            result,
            Err(AppError::MemberErr(MemberError::DuplicateNickname(nickname))) if nickname == "taken"
        ));
        assert_eq!(service.get(member.id).await?.nickname, "original");
        assert_eq!(service.get(holder.id).await?.nickname, "taken");

        Ok(())
    }

    #[tokio::test]
    async fn applies_unused_nickname() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let member = factory::create_member(db).await?;
        let service = MemberService::new(db);

        service.update(rename(member.id, "fresh_name")).await?;

        assert_eq!(service.get(member.id).await?.nickname, "fresh_name");

        Ok(())
    }

    #[tokio::test]
    async fn accepts_own_nickname() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let member = factory::create_member(db).await?;

        let updated = MemberService::new(db)
            .update(rename(member.id, &member.nickname))
            .await?;

        assert_eq!(updated.nickname, member.nickname);

        Ok(())
    }

    #[tokio::test]
    async fn leaves_absent_fields_untouched() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let member = factory::member::MemberFactory::new(db)
            .introduction("before")
            .profile_image_url("https://img.habiters.test/a.png")
            .build()
            .await?;

        let updated = MemberService::new(db)
            .update(UpdateMemberParams::from_dto(
                member.id,
                UpdateMemberDto {
                    introduction: Some("after".to_string()),
                    ..Default::default()
                },
            )?)
            .await?;

        assert_eq!(updated.nickname, member.nickname);
        assert_eq!(updated.introduction.as_deref(), Some("after"));
        assert_eq!(
            updated.profile_image_url.as_deref(),
            Some("https://img.habiters.test/a.png")
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_update_and_delete_for_missing_member() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = MemberService::new(db);

        assert!(matches!(
            service.update(rename(404, "ghost")).await,
            Err(AppError::MemberErr(MemberError::NotFound(404)))
        ));
        assert!(matches!(
            service.delete(404).await,
            Err(AppError::MemberErr(MemberError::NotFound(404)))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_to_owned_rows() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (member, post) = factory::helpers::create_post_with_author(db).await?;
        factory::create_habit(db, member.id).await?;
        factory::create_comment(db, post.id, member.id).await?;

        MemberService::new(db).delete(member.id).await?;

        assert_eq!(entity::prelude::Post::find().count(db).await?, 0);
        assert_eq!(entity::prelude::Habit::find().count(db).await?, 0);
        assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

        Ok(())
    }
}
