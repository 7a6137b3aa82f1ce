use super::*;

/// Tests published articles come back newest publication first.
///
/// Expected: Ok(Vec) ordered by `published_at` descending
#[tokio::test]
async fn orders_newest_published_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::news_article::NewsArticleFactory::new(db)
        .published_at(now - Duration::days(3))
        .build()
        .await?;
    let newest = factory::news_article::NewsArticleFactory::new(db)
        .published_at(now - Duration::hours(1))
        .build()
        .await?;
    let middle = factory::news_article::NewsArticleFactory::new(db)
        .published_at(now - Duration::days(1))
        .build()
        .await?;

    let articles = NewsArticleRepository::new(db).get_all(Some(true)).await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, older.id]);

    Ok(())
}

/// Tests the published filter separates drafts from published articles.
///
/// Expected: Ok(Vec) with only the matching article for each flag, both
/// without a filter
#[tokio::test]
async fn filters_by_published_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = factory::news_article::create_news_article(db).await?;
    let published = factory::news_article::NewsArticleFactory::new(db)
        .published_at(Utc::now())
        .build()
        .await?;

    let repo = NewsArticleRepository::new(db);

    let live: Vec<i32> = repo.get_all(Some(true)).await?.iter().map(|a| a.id).collect();
    assert_eq!(live, vec![published.id]);

    let drafts: Vec<i32> = repo.get_all(Some(false)).await?.iter().map(|a| a.id).collect();
    assert_eq!(drafts, vec![draft.id]);

    assert_eq!(repo.get_all(None).await?.len(), 2);

    Ok(())
}
