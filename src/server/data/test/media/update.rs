use super::*;

/// Tests clearing alt text while keeping the filename.
///
/// Expected: Ok(Media) with `alt_text` None and the original filename
#[tokio::test]
async fn clears_alt_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = factory::media::MediaFactory::new(db)
        .alt_text("Team photo")
        .build()
        .await?;

    let updated = MediaRepository::new(db)
        .update(UpdateMediaParams {
            id: media.id,
            alt_text: Some(None),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.alt_text, None);
    assert_eq!(updated.filename, media.filename);

    Ok(())
}

/// Tests an update with no changes returns the stored row.
///
/// Expected: Ok(Media) equal to the original
#[tokio::test]
async fn empty_update_keeps_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = factory::media::create_media(db).await?;

    let updated = MediaRepository::new(db)
        .update(UpdateMediaParams {
            id: media.id,
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.id, media.id);
    assert_eq!(updated.url, media.url);
    assert_eq!(updated.alt_text, None);

    Ok(())
}
