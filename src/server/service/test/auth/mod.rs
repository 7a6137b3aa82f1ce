use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, Role},
    service::{
        auth::{jwt::JwtService, AuthService},
        user::UserService,
    },
};
use test_utils::builder::TestBuilder;

mod login;

const SECRET: &str = "login-test-secret";

fn editor(email: &str, password: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        name: "Table Official".to_string(),
        password: password.to_string(),
        role: Role::Editor,
    }
}
