use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserRes};
use crate::utils::token::encrypt;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    if body.id.is_empty() || body.id.chars().count() > 8 {
        return Err(AppError::Validation("id must be 1-8 characters".to_string()));
    }
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if body.password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }

    let hash = encrypt(&body.password)
        .map_err(|_| AppError::Internal("Failed to hash password".to_string()))?;

    let id = db
        .create_user(DBUserCreate {
            id: body.id.clone(),
            name: body.name.clone(),
            password: hash,
        })
        .await?;
    let user = db.get_user_by_id(&id).await?;

    Ok(ApiResponse::Created(UserRes::from(&user)))
}
