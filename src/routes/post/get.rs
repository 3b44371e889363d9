use actix_web::{get, web};
use chrono::Utc;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::post::PostRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
async fn get(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<PostRes> {
    let post = db.get_post(path.into_inner()).await?;
    let bundle = db.post_bundle(post).await?;
    Ok(ApiResponse::Ok(PostRes::from_bundle(&bundle, Utc::now())))
}
