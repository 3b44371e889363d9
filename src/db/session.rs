use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use chrono::{DateTime, Utc};
use entity::session::{ActiveModel as SessionActive, Entity as Session, Model as SessionModel};
use sea_orm::{DbErr, EntityTrait, Set};
use uuid::Uuid;

impl DatabaseService {
    /// Store a new session row. `token` is the argon2 hash of the cookie
    /// secret, never the secret itself.
    pub async fn create_session(
        &self,
        user_id: &str,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Uuid, AppError> {
        let session_id = Uuid::new_v4();
        Session::insert(SessionActive {
            id: Set(session_id),
            user_id: Set(user_id.to_string()),
            token: Set(token),
            created_at: Set(Utc::now()),
            expires_at: Set(expires_at),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(session_id)
    }

    pub async fn get_session(&self, id: Uuid) -> Result<SessionModel, AppError> {
        Ok(Session::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Session does not exist".into()))?)
    }

    pub async fn delete_session(&self, id: Uuid) -> Result<(), AppError> {
        Session::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }
}
