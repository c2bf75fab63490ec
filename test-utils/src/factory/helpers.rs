//! Shared helpers for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of a process-wide counter used to build unique test values.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member and a post authored by them.
pub async fn create_post_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::member::Model, entity::post::Model), DbErr> {
    let member = crate::factory::member::create_member(db).await?;
    let post = crate::factory::post::create_post(db, member.id).await?;

    Ok((member, post))
}
