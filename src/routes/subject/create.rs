use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::tag::{RTagCreate, TagRes};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RTagCreate>,
) -> ApiResult<TagRes> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    let subject = db.create_subject(body.name.clone()).await?;
    Ok(ApiResponse::Created(TagRes::from(&subject)))
}
