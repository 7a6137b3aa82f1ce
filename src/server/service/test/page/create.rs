use super::*;

/// Tests a second page cannot reuse a slug.
///
/// Expected: Err(BadRequest) and a single stored page
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);
    service.create(new_page("about")).await?;

    let result = service.create(new_page("about")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_all(None).await?.len(), 1);

    Ok(())
}

/// Tests slugs must be lowercase letters, digits and hyphens.
///
/// Expected: Err(BadRequest) for each malformed slug
#[tokio::test]
async fn rejects_malformed_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);
    for slug in ["", "About", "about us", "about/us"] {
        let result = service.create(new_page(slug)).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "slug {:?} was accepted",
            slug
        );
    }

    Ok(())
}

/// Tests a page needs a title.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PageService::new(db)
        .create(CreatePageParams {
            title: "  ".to_string(),
            ..new_page("about")
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
