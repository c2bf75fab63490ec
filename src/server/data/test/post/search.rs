use super::*;

/// Tests filtering by category with newest posts first.
///
/// Expected: only STUDY posts, newest first, total counting all pages
#[tokio::test]
async fn filters_category_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let now = Utc::now();
    let older = factory::post::PostFactory::new(db, member.id)
        .category("STUDY")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::post::PostFactory::new(db, member.id)
        .category("STUDY")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::post::PostFactory::new(db, member.id)
        .category("HOBBY")
        .created_at(now)
        .build()
        .await?;

    let (posts, total) = PostRepository::new(db)
        .search(&PostSearchParams::new(Some(Category::Study), 0, 10))
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        posts.iter().map(|p| p.post.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    Ok(())
}

/// Tests that the page window does not change the total.
///
/// Expected: second page of size 2 holds the last post, total 3
#[tokio::test]
async fn paginates_with_full_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let now = Utc::now();
    let mut ids = Vec::new();
    for i in 0..3 {
        let post = factory::post::PostFactory::new(db, member.id)
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
        ids.push(post.id);
    }

    let (posts, total) = PostRepository::new(db)
        .search(&PostSearchParams::new(None, 1, 2))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].post.id, ids[2]);

    Ok(())
}

/// Tests that comment and emoji counts come back per post.
///
/// Expected: counts match the rows attached to each post
#[tokio::test]
async fn reports_child_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, busy) = factory::helpers::create_post_with_author(db).await?;
    let quiet = factory::create_post(db, member.id).await?;
    let comment = factory::create_comment(db, busy.id, member.id).await?;
    factory::create_reply(db, &comment, member.id).await?;
    factory::create_emoji(db, busy.id, member.id, "LIKE").await?;

    let (posts, _) = PostRepository::new(db)
        .search(&PostSearchParams::new(None, 0, 10))
        .await?;

    let busy_summary = posts.iter().find(|p| p.post.id == busy.id).unwrap();
    let quiet_summary = posts.iter().find(|p| p.post.id == quiet.id).unwrap();

    assert_eq!(busy_summary.comment_count, 2);
    assert_eq!(busy_summary.emoji_count, 1);
    assert_eq!(quiet_summary.comment_count, 0);
    assert_eq!(quiet_summary.emoji_count, 0);

    Ok(())
}

/// Tests content-only keyword search against the full-text index.
///
/// Expected: the post mentioning the word in its content, not the one with it in the title
#[tokio::test]
async fn content_search_ignores_titles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let in_content = factory::post::PostFactory::new(db, member.id)
        .title("Saturday")
        .content("Long swim at the lake")
        .build()
        .await?;
    factory::post::PostFactory::new(db, member.id)
        .title("swim plans")
        .content("Nothing yet")
        .build()
        .await?;

    let params = PostSearchParams::new(None, 0, 10)
        .with_keyword(Some(SearchType::Content), Some("swim".to_string()));
    let (posts, total) = PostRepository::new(db).search(&params).await?;

    assert_eq!(total, 1);
    assert_eq!(posts[0].post.id, in_content.id);

    Ok(())
}
