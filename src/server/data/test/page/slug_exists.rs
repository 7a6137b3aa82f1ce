use super::*;

/// Tests detecting a slug already used by another page.
///
/// Expected: Ok(true) for the taken slug, Ok(false) with the page itself excluded
#[tokio::test]
async fn detects_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::page::PageFactory::new(db).slug("about").build().await?;

    let repo = PageRepository::new(db);
    assert!(repo.slug_exists("about", None).await?);
    assert!(!repo.slug_exists("about", Some(page.id)).await?);
    assert!(!repo.slug_exists("contact", None).await?);

    Ok(())
}
