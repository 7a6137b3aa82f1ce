use sea_orm::DatabaseConnection;

use crate::server::{
    config::AdminSeed,
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, Role, User},
    service::auth::password::{hash_password, MIN_PASSWORD_LENGTH},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user after validating the email and password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Invalid email, short password or email already taken
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        if !params.email.contains('@') {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if params.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "A user with email {} already exists",
                params.email
            )));
        }

        let password_hash = hash_password(&params.password)?;
        let user = repo
            .create(params.email, params.name, password_hash, params.role)
            .await?;

        tracing::info!("Created {} user {}", user.role.as_str(), user.id);

        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Creates the bootstrap admin when no user with the seed email exists.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin created
    /// - `Ok(None)` - Email already registered, nothing changed
    pub async fn seed_admin(&self, seed: &AdminSeed) -> Result<Option<User>, AppError> {
        let email = seed.email.trim().to_lowercase();
        if UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Ok(None);
        }

        let user = self
            .create(CreateUserParams {
                email,
                name: seed.name.clone(),
                password: seed.password.clone(),
                role: Role::Admin,
            })
            .await?;

        Ok(Some(user))
    }
}
