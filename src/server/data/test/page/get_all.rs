use super::*;

/// Tests pages are listed alphabetically by title.
///
/// Expected: Ok(Vec) ordered About, Contact, Rules
#[tokio::test]
async fn orders_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rules = factory::page::PageFactory::new(db).title("Rules").build().await?;
    let about = factory::page::PageFactory::new(db).title("About").build().await?;
    let contact = factory::page::PageFactory::new(db)
        .title("Contact")
        .build()
        .await?;

    let pages = PageRepository::new(db).get_all(None).await?;

    let ids: Vec<i32> = pages.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![about.id, contact.id, rules.id]);

    Ok(())
}

/// Tests the published filter hides drafts.
///
/// Expected: Ok(Vec) with only the published page
#[tokio::test]
async fn filters_by_published_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::page::create_page(db).await?;
    let published = factory::page::PageFactory::new(db)
        .published(true)
        .build()
        .await?;

    let pages = PageRepository::new(db).get_all(Some(true)).await?;

    let ids: Vec<i32> = pages.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![published.id]);

    Ok(())
}
