use super::*;

/// Tests deleting a comment removes its whole reply thread.
///
/// Expected: Ok(true), the reply and nested reply are gone, the sibling stays
#[tokio::test]
async fn removes_reply_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::news_article::create_news_article(db).await?;
    let parent = factory::comment::create_comment(db, article.id).await?;
    let reply = factory::comment::CommentFactory::new(db, article.id)
        .parent_id(parent.id)
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, article.id)
        .parent_id(reply.id)
        .build()
        .await?;
    let sibling = factory::comment::create_comment(db, article.id).await?;

    let repo = CommentRepository::new(db);
    assert!(repo.delete(parent.id).await?);

    let remaining: Vec<i32> = repo
        .get_by_article(article.id)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(remaining, vec![sibling.id]);

    Ok(())
}

/// Tests deleting an unknown comment reports nothing removed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CommentRepository::new(db).delete(999).await?);

    Ok(())
}
