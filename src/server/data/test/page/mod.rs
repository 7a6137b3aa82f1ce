use crate::server::data::page::PageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod slug_exists;
