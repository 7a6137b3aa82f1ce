use super::*;

/// Tests replying to a comment that belongs to a different article.
///
/// Expected: Err(BadRequest) and no comment stored on the target article
#[tokio::test]
async fn rejects_parent_from_other_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::news_article::create_news_article(db).await?;
    let other = factory::news_article::create_news_article(db).await?;
    let foreign = factory::comment::create_comment(db, other.id).await?;

    let service = NewsService::new(db);
    let result = service.add_comment(reply(article.id, Some(foreign.id))).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_comments(article.id).await?.is_empty());

    Ok(())
}

/// Tests replying to a comment that does not exist.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_missing_parent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::news_article::create_news_article(db).await?;

    let result = NewsService::new(db)
        .add_comment(reply(article.id, Some(999)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests commenting on an article that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NewsService::new(db).add_comment(reply(999, None)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests replies are nested under their parent, oldest first.
///
/// Expected: one root whose replies are ordered by `created_at` regardless of
/// insertion order
#[tokio::test]
async fn nests_replies_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::news_article::create_news_article(db).await?;
    let now = Utc::now();
    let root = factory::comment::CommentFactory::new(db, article.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let late_reply = factory::comment::CommentFactory::new(db, article.id)
        .parent_id(root.id)
        .created_at(now)
        .build()
        .await?;
    let early_reply = factory::comment::CommentFactory::new(db, article.id)
        .parent_id(root.id)
        .created_at(now - Duration::minutes(30))
        .build()
        .await?;

    let tree = NewsService::new(db).get_comments(article.id).await?;

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, root.id);
    let replies: Vec<i32> = tree[0].replies.iter().map(|r| r.id).collect();
    assert_eq!(replies, vec![early_reply.id, late_reply.id]);

    Ok(())
}

/// Tests deleting a comment also deletes its replies.
///
/// Expected: Ok(()) and an empty comment tree
#[tokio::test]
async fn delete_removes_replies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::news_article::create_news_article(db).await?;
    let service = NewsService::new(db);
    let root = service.add_comment(reply(article.id, None)).await?;
    let child = service.add_comment(reply(article.id, Some(root.id))).await?;
    service.add_comment(reply(article.id, Some(child.id))).await?;

    service.delete_comment(article.id, root.id).await?;

    assert!(service.get_comments(article.id).await?.is_empty());

    Ok(())
}

/// Tests deleting a comment through the wrong article.
///
/// Expected: Err(NotFound) and the comment kept
#[tokio::test]
async fn delete_checks_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::news_article::create_news_article(db).await?;
    let other = factory::news_article::create_news_article(db).await?;
    let comment = factory::comment::create_comment(db, article.id).await?;

    let service = NewsService::new(db);
    let result = service.delete_comment(other.id, comment.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get_comments(article.id).await?.len(), 1);

    Ok(())
}
