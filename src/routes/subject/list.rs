use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::tag::TagRes;

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Vec<TagRes>> {
    let subjects = db.list_subjects().await?;
    Ok(ApiResponse::Ok(subjects.iter().map(TagRes::from).collect()))
}
