use crate::{
    model::matches::MatchStatus,
    server::{data::matches::MatchRepository, model::matches::MatchFilter},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod next_sequence_number;
