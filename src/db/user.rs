use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl DatabaseService {
    pub async fn user_exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Id.eq(id))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Signup: create user. The payload's password field is already hashed.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<String, AppError> {
        if self.user_exists(&payload.id).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        User::insert(UserActive {
            id: Set(payload.id.clone()),
            name: Set(payload.name),
            password: Set(payload.password),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(payload.id)
    }

    /// Users are the only deletable resource. FK cascades take the user's
    /// posts, comments, tags and sessions with them.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let res = User::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
