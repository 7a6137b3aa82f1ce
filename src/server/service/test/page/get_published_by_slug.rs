use super::*;

/// Tests the public lookup finds a published page by slug.
///
/// Expected: Ok(Page) with the matching id
#[tokio::test]
async fn finds_published_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::page::PageFactory::new(db)
        .slug("rules")
        .published(true)
        .build()
        .await?;

    let found = PageService::new(db).get_published_by_slug("rules").await?;

    assert_eq!(found.id, page.id);

    Ok(())
}

/// Tests drafts stay hidden from the public lookup.
///
/// Expected: Err(NotFound), while the page is still reachable by id
#[tokio::test]
async fn hides_draft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = factory::page::PageFactory::new(db).slug("rules").build().await?;
    let service = PageService::new(db);

    let result = service.get_published_by_slug("rules").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get_by_id(draft.id).await?.slug, "rules");

    Ok(())
}
