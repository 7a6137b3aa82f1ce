use crate::server::{
    error::AppError, model::game_rules::GameRules, service::game_rules::GameRulesService,
};
use test_utils::{builder::TestBuilder, factory};

mod attach;
