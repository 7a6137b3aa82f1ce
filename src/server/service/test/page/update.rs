use super::*;

/// Tests moving a page onto another page's slug.
///
/// Expected: Err(BadRequest), while re-saving its own slug succeeds
#[tokio::test]
async fn rejects_taken_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::page::PageFactory::new(db).slug("contact").build().await?;
    let page = factory::page::PageFactory::new(db).slug("about").build().await?;
    let service = PageService::new(db);

    let result = service
        .update(UpdatePageParams {
            id: page.id,
            slug: Some("contact".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let updated = service
        .update(UpdatePageParams {
            id: page.id,
            slug: Some("about".to_string()),
            published: Some(true),
            ..Default::default()
        })
        .await?;
    assert_eq!(updated.slug, "about");
    assert!(updated.published);

    Ok(())
}

/// Tests updating a page that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PageService::new(db)
        .update(UpdatePageParams {
            id: 999,
            title: Some("Gone".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
