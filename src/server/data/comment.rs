use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            article_id: ActiveValue::Set(params.article_id),
            parent_id: ActiveValue::Set(params.parent_id),
            author_name: ActiveValue::Set(params.author_name),
            body: ActiveValue::Set(params.body),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Gets every comment of an article as a flat list in creation order.
    pub async fn get_by_article(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Deletes a comment. Replies are removed by the `parent_id` cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
