use crate::db::comment::CommentBundle;
use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, post::DBPostCreate};
use chrono::Utc;
use entity::post::{ActiveModel as PostActive, Entity as Post, Model as PostModel};
use entity::post_place::ActiveModel as PostPlaceActive;
use entity::post_subject::ActiveModel as PostSubjectActive;
use entity::user_post::ActiveModel as UserPostActive;
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// A post with everything its API representation needs.
pub struct PostBundle {
    pub post: PostModel,
    pub author: entity::user::Model,
    pub places: Vec<entity::place::Model>,
    pub subjects: Vec<entity::subject::Model>,
    pub people: Vec<entity::user::Model>,
    pub comments: Vec<CommentBundle>,
}

impl DatabaseService {
    /// Insert a post and its tag rows in one transaction. Tag ids are
    /// resolved (and people validated) by the caller beforehand.
    pub async fn create_post(&self, payload: DBPostCreate) -> Result<i32, AppError> {
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let res = Post::insert(PostActive {
            content: Set(payload.content),
            author_id: Set(payload.author_id),
            timestamp: Set(now),
            image: Set(payload.image),
            ..Default::default()
        })
        .exec(&txn)
        .await?;
        let post_id = res.last_insert_id;

        for place_id in payload.place_ids {
            entity::post_place::Entity::insert(PostPlaceActive {
                post_id: Set(post_id),
                place_id: Set(place_id),
                created_at: Set(now),
            })
            .exec(&txn)
            .await?;
        }
        for subject_id in payload.subject_ids {
            entity::post_subject::Entity::insert(PostSubjectActive {
                post_id: Set(post_id),
                subject_id: Set(subject_id),
                created_at: Set(now),
            })
            .exec(&txn)
            .await?;
        }
        for user_id in payload.people_ids {
            entity::user_post::Entity::insert(UserPostActive {
                user_id: Set(user_id),
                post_id: Set(post_id),
                created_at: Set(now),
            })
            .exec(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(post_id)
    }

    pub async fn get_post(&self, id: i32) -> Result<PostModel, AppError> {
        Ok(Post::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Post does not exist".into()))?)
    }

    pub async fn list_posts(&self) -> Result<Vec<PostModel>, AppError> {
        Ok(Post::find()
            .order_by_desc(entity::post::Column::Timestamp)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn post_bundle(&self, post: PostModel) -> Result<PostBundle, AppError> {
        let author = self.get_user_by_id(&post.author_id).await?;
        let places = post
            .find_related(entity::place::Entity)
            .all(&self.database_connection)
            .await?;
        let subjects = post
            .find_related(entity::subject::Entity)
            .all(&self.database_connection)
            .await?;
        let people = post
            .find_related(entity::user::Entity)
            .all(&self.database_connection)
            .await?;

        let comment_rows = entity::comment::Entity::find()
            .filter(entity::comment::Column::PostId.eq(post.id))
            .order_by_asc(entity::comment::Column::Id)
            .all(&self.database_connection)
            .await?;
        let mut comments = Vec::with_capacity(comment_rows.len());
        for comment in comment_rows {
            comments.push(self.comment_bundle(comment).await?);
        }

        Ok(PostBundle {
            post,
            author,
            places,
            subjects,
            people,
            comments,
        })
    }
}
