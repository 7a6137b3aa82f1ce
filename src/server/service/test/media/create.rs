use super::*;

/// Tests registering a file records its uploader and a lowercased type.
///
/// Expected: Ok(Media) with `image/jpeg` and the uploader's id
#[tokio::test]
async fn registers_media() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let editor = factory::user::create_user(db).await?;
    let params = CreateMediaParams {
        uploaded_by: Some(editor.id),
        ..upload("https://cdn.example.com/team-photo.jpg", "Image/JPEG")
    };

    let media = MediaService::new(db).create(params).await?;

    assert_eq!(media.mime_type, "image/jpeg");
    assert_eq!(media.uploaded_by, Some(editor.id));
    assert_eq!(media.alt_text.as_deref(), Some("Team photo"));

    Ok(())
}

/// Tests malformed metadata is rejected before anything is stored.
///
/// Expected: Err(BadRequest) for each case and an empty library
#[tokio::test]
async fn rejects_malformed_metadata() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MediaService::new(db);
    for params in [
        upload("/uploads/photo.jpg", "jpeg"),
        upload("ftp://cdn.example.com/photo.jpg", "image/jpeg"),
        upload("/uploads/my photo.jpg", "image/jpeg"),
        CreateMediaParams {
            filename: " ".to_string(),
            ..upload("/uploads/photo.jpg", "image/jpeg")
        },
    ] {
        let result = service.create(params.clone()).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "{:?} was accepted",
            params
        );
    }

    assert!(service.get_all(MediaFilter::default()).await?.is_empty());

    Ok(())
}
