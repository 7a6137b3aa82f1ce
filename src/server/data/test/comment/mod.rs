use crate::server::data::comment::CommentRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_article;
