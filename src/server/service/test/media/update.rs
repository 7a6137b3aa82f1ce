use super::*;

/// Tests clearing alt text through the service.
///
/// Expected: Ok(Media) with no alt text
#[tokio::test]
async fn clears_alt_text() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = factory::media::MediaFactory::new(db)
        .alt_text("Team photo")
        .build()
        .await?;

    let updated = MediaService::new(db)
        .update(UpdateMediaParams {
            id: media.id,
            alt_text: Some(None),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.alt_text, None);

    Ok(())
}

/// Tests renaming to a blank filename.
///
/// Expected: Err(BadRequest) and the filename unchanged
#[tokio::test]
async fn rejects_blank_filename() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = factory::media::create_media(db).await?;
    let service = MediaService::new(db);

    let result = service
        .update(UpdateMediaParams {
            id: media.id,
            filename: Some("".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_by_id(media.id).await?.filename, media.filename);

    Ok(())
}
