use super::*;

/// Tests comments come back oldest first and only for the requested article.
///
/// Expected: Ok(Vec) in creation order without the other article's comment
#[tokio::test]
async fn returns_article_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::news_article::create_news_article(db).await?;
    let other = factory::news_article::create_news_article(db).await?;

    let now = Utc::now();
    let later = factory::comment::CommentFactory::new(db, article.id)
        .created_at(now)
        .build()
        .await?;
    let earlier = factory::comment::CommentFactory::new(db, article.id)
        .created_at(now - Duration::minutes(10))
        .build()
        .await?;
    factory::comment::create_comment(db, other.id).await?;

    let comments = CommentRepository::new(db)
        .get_by_article(article.id)
        .await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}
