use crate::server::data::season::SeasonRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
