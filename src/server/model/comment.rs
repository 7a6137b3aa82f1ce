//! Article comments and reply threading.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use crate::model::news::{CommentDto, CreateCommentDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub article_id: i32,
    pub parent_id: Option<i32>,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            parent_id: entity.parent_id,
            author_name: entity.author_name,
            body: entity.body,
            created_at: entity.created_at,
        }
    }

    /// A comment without replies, as returned right after it is posted.
    pub fn into_dto(self) -> CommentDto {
        self.into_tree_dto(Vec::new())
    }

    fn into_tree_dto(self, replies: Vec<CommentDto>) -> CommentDto {
        CommentDto {
            id: self.id,
            article_id: self.article_id,
            parent_id: self.parent_id,
            author_name: self.author_name,
            body: self.body,
            created_at: self.created_at,
            replies,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub article_id: i32,
    pub parent_id: Option<i32>,
    pub author_name: String,
    pub body: String,
}

impl CreateCommentParams {
    pub fn from_dto(article_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            article_id,
            parent_id: dto.parent_id,
            author_name: dto.author_name,
            body: dto.body,
        }
    }
}

/// Nests a flat list of comments into reply trees.
///
/// Roots and each reply list are ordered by creation time, ties broken by id.
/// Comments whose parent is not in the list are treated as roots so nothing is
/// silently dropped.
pub fn build_comment_tree(mut comments: Vec<Comment>) -> Vec<CommentDto> {
    comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

    let known: HashSet<i32> = comments.iter().map(|c| c.id).collect();
    let mut children: HashMap<i32, Vec<Comment>> = HashMap::new();
    let mut roots = Vec::new();

    for comment in comments {
        match comment.parent_id {
            Some(parent_id) if known.contains(&parent_id) => {
                children.entry(parent_id).or_default().push(comment)
            }
            _ => roots.push(comment),
        }
    }

    roots
        .into_iter()
        .map(|root| attach_replies(root, &mut children))
        .collect()
}

fn attach_replies(comment: Comment, children: &mut HashMap<i32, Vec<Comment>>) -> CommentDto {
    let replies = children
        .remove(&comment.id)
        .unwrap_or_default()
        .into_iter()
        .map(|reply| attach_replies(reply, children))
        .collect();

    comment.into_tree_dto(replies)
}
