use super::*;

/// Tests detecting a slug already used by another article.
///
/// Expected: Ok(true) for the taken slug, Ok(false) otherwise
#[tokio::test]
async fn detects_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::news_article::NewsArticleFactory::new(db)
        .slug("season-preview")
        .build()
        .await?;

    let repo = NewsArticleRepository::new(db);
    assert!(repo.slug_exists("season-preview", None).await?);
    assert!(!repo.slug_exists("finals-recap", None).await?);

    Ok(())
}

/// Tests an article's own slug is ignored when excluded.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::news_article::NewsArticleFactory::new(db)
        .slug("season-preview")
        .build()
        .await?;

    let taken = NewsArticleRepository::new(db)
        .slug_exists("season-preview", Some(article.id))
        .await?;

    assert!(!taken);

    Ok(())
}
