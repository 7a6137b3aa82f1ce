use super::*;

/// Tests the library is listed newest upload first.
///
/// Expected: Ok(Vec) ordered by `created_at` descending
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = factory::media::MediaFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let new = factory::media::MediaFactory::new(db).created_at(now).build().await?;

    let media = MediaRepository::new(db)
        .get_all(MediaFilter::default())
        .await?;

    let ids: Vec<i32> = media.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![new.id, old.id]);

    Ok(())
}

/// Tests filtering by a full MIME type or by its top-level type.
///
/// Expected: `image/png` matches the PNG only, `image` matches both images,
/// `video` matches the clip only
#[tokio::test]
async fn filters_by_mime_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let png = factory::media::MediaFactory::new(db)
        .created_at(now - Duration::minutes(2))
        .build()
        .await?;
    let jpeg = factory::media::MediaFactory::new(db)
        .mime_type("image/jpeg")
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;
    let clip = factory::media::MediaFactory::new(db)
        .mime_type("video/mp4")
        .created_at(now)
        .build()
        .await?;

    let repo = MediaRepository::new(db);
    let ids = |media: Vec<crate::server::model::media::Media>| -> Vec<i32> {
        media.iter().map(|m| m.id).collect()
    };

    let exact = repo
        .get_all(MediaFilter {
            mime_type: Some("image/png".to_string()),
        })
        .await?;
    assert_eq!(ids(exact), vec![png.id]);

    let images = repo
        .get_all(MediaFilter {
            mime_type: Some("image".to_string()),
        })
        .await?;
    assert_eq!(ids(images), vec![jpeg.id, png.id]);

    let videos = repo
        .get_all(MediaFilter {
            mime_type: Some("video".to_string()),
        })
        .await?;
    assert_eq!(ids(videos), vec![clip.id]);

    Ok(())
}
