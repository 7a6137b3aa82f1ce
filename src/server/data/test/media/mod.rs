use crate::server::{
    data::media::MediaRepository,
    model::media::{MediaFilter, UpdateMediaParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
