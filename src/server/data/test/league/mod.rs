use crate::server::{data::league::LeagueRepository, model::league::UpdateLeagueParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod slug_exists;
mod update;
