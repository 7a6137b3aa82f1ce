use crate::server::{
    config::AdminSeed,
    error::AppError,
    model::user::{CreateUserParams, Role},
    service::{auth::password::verify_password, user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod seed_admin;
