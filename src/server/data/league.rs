use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::league::{CreateLeagueParams, League, UpdateLeagueParams};

pub struct LeagueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new league.
    ///
    /// # Returns
    /// - `Ok(League)` - The created league
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, params: CreateLeagueParams) -> Result<League, DbErr> {
        let entity = entity::league::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(League::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<League>, DbErr> {
        let entity = entity::prelude::League::find_by_id(id).one(self.db).await?;

        Ok(entity.map(League::from_entity))
    }

    /// Gets all leagues ordered by name.
    pub async fn get_all(&self) -> Result<Vec<League>, DbErr> {
        let entities = entity::prelude::League::find()
            .order_by_asc(entity::league::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(League::from_entity).collect())
    }

    /// Checks whether another league already uses the slug.
    ///
    /// # Arguments
    /// - `slug` - Slug to check
    /// - `exclude_id` - League to ignore, used when updating a league's own slug
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::League::find().filter(entity::league::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(entity::league::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Updates the provided fields of a league.
    ///
    /// # Returns
    /// - `Ok(League)` - The updated league
    /// - `Err(DbErr::RecordNotFound)` - League does not exist
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateLeagueParams) -> Result<League, DbErr> {
        let league = entity::prelude::League::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "League {} not found",
                params.id
            )))?;

        let mut active_model: entity::league::ActiveModel = league.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(slug) = params.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }

        let entity = active_model.update(self.db).await?;

        Ok(League::from_entity(entity))
    }

    /// Deletes a league.
    ///
    /// # Returns
    /// - `Ok(true)` - League deleted
    /// - `Ok(false)` - No league with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::League::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
