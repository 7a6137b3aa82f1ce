use crate::server::data::news_article::NewsArticleRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod slug_exists;
