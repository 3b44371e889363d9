use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<()> {
    db.delete_user(&path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
