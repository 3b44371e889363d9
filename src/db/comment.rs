use crate::db::database_service::DatabaseService;
use crate::types::{comment::DBCommentCreate, error::AppError};
use chrono::Utc;
use entity::comment::{ActiveModel as CommentActive, Entity as Comment, Model as CommentModel};
use entity::user_comment::ActiveModel as UserCommentActive;
use sea_orm::{
    ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

pub struct CommentBundle {
    pub comment: CommentModel,
    pub author: entity::user::Model,
    pub people: Vec<entity::user::Model>,
}

impl DatabaseService {
    /// Insert a comment and its people tags in one transaction. The post
    /// and the tagged users are validated by the caller.
    pub async fn create_comment(&self, payload: DBCommentCreate) -> Result<i32, AppError> {
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let res = Comment::insert(CommentActive {
            post_id: Set(payload.post_id),
            author_id: Set(payload.author_id),
            timestamp: Set(now),
            content: Set(payload.content),
            ..Default::default()
        })
        .exec(&txn)
        .await?;
        let comment_id = res.last_insert_id;

        for user_id in payload.people_ids {
            entity::user_comment::Entity::insert(UserCommentActive {
                user_id: Set(user_id),
                comment_id: Set(comment_id),
                created_at: Set(now),
            })
            .exec(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(comment_id)
    }

    pub async fn get_comment(&self, id: i32) -> Result<CommentModel, AppError> {
        Ok(Comment::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Comment does not exist".into()))?)
    }

    pub async fn list_comments(&self, post_id: Option<i32>) -> Result<Vec<CommentModel>, AppError> {
        let mut finder = Comment::find();
        if let Some(post_id) = post_id {
            finder = finder.filter(entity::comment::Column::PostId.eq(post_id));
        }
        Ok(finder
            .order_by_asc(entity::comment::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn comment_bundle(&self, comment: CommentModel) -> Result<CommentBundle, AppError> {
        let author = self.get_user_by_id(&comment.author_id).await?;
        let people = comment
            .find_related(entity::user::Entity)
            .all(&self.database_connection)
            .await?;
        Ok(CommentBundle {
            comment,
            author,
            people,
        })
    }
}
