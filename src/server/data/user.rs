//! User data repository for database operations.
//!
//! Provides `UserRepository` for account lookup during login and for the admin
//! user management endpoints.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::user::{Role, User};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user with an already hashed password.
    ///
    /// # Arguments
    /// - `email` - Normalized email address, unique across users
    /// - `name` - Display name
    /// - `password_hash` - bcrypt hash of the password
    /// - `role` - Account role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(
        &self,
        email: String,
        name: String,
        password_hash: String,
        role: Role,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            name: ActiveValue::Set(name),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error or unknown stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email address. The caller normalizes the address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets all users ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }
}
