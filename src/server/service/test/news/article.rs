use super::*;

fn new_article(slug: &str, published: bool) -> CreateNewsArticleParams {
    CreateNewsArticleParams::from_dto(
        CreateNewsArticleDto {
            title: "Season preview".to_string(),
            slug: slug.to_string(),
            body: "Tip-off is near".to_string(),
            published,
            published_at: None,
        },
        None,
    )
}

/// Tests a second article cannot reuse a slug.
///
/// Expected: Err(BadRequest) and only the first article stored
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsService::new(db);
    service.create(new_article("season-preview", false)).await?;

    let result = service.create(new_article("season-preview", false)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_all(None).await?.len(), 1);

    Ok(())
}

/// Tests renaming an article onto another article's slug.
///
/// Expected: Err(BadRequest), while keeping its own slug succeeds
#[tokio::test]
async fn update_rejects_taken_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::news_article::NewsArticleFactory::new(db)
        .slug("finals-recap")
        .build()
        .await?;
    let article = factory::news_article::NewsArticleFactory::new(db)
        .slug("season-preview")
        .build()
        .await?;

    let service = NewsService::new(db);
    let rename = |slug: &str| UpdateNewsArticleParams {
        id: article.id,
        title: None,
        slug: Some(slug.to_string()),
        body: None,
        published: None,
        published_at: None,
    };

    let result = service.update(rename("finals-recap")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let kept = service.update(rename("season-preview")).await?;
    assert_eq!(kept.slug, "season-preview");

    Ok(())
}

/// Tests publishing a draft stamps the publication time.
///
/// Expected: published with `published_at` set to about now
#[tokio::test]
async fn publishing_stamps_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = factory::news_article::create_news_article(db).await?;
    let before = Utc::now();

    let article = NewsService::new(db)
        .update(UpdateNewsArticleParams {
            id: draft.id,
            title: None,
            slug: None,
            body: None,
            published: Some(true),
            published_at: None,
        })
        .await?;

    assert!(article.published);
    let published_at = article.published_at.unwrap();
    assert!(published_at >= before - Duration::seconds(1));

    Ok(())
}

/// Tests the published listing puts the latest publication first.
///
/// Expected: newest article first, draft excluded
#[tokio::test]
async fn lists_published_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::news_article::NewsArticleFactory::new(db)
        .published_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::news_article::NewsArticleFactory::new(db)
        .published_at(now)
        .build()
        .await?;
    factory::news_article::create_news_article(db).await?;

    let articles = NewsService::new(db).get_all(Some(true)).await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
