use crate::{
    model::media::CreateMediaDto,
    server::{
        error::AppError,
        model::media::{CreateMediaParams, MediaFilter, UpdateMediaParams},
        service::media::MediaService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn upload(url: &str, mime_type: &str) -> CreateMediaParams {
    CreateMediaParams::from_dto(
        CreateMediaDto {
            url: url.to_string(),
            filename: "team-photo.jpg".to_string(),
            mime_type: mime_type.to_string(),
            alt_text: Some("Team photo".to_string()),
        },
        None,
    )
}
