use actix_web::{get, web};
use chrono::Utc;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::post::PostRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Vec<PostRes>> {
    let now = Utc::now();
    let posts = db.list_posts().await?;
    let mut out = Vec::with_capacity(posts.len());
    for post in posts {
        let bundle = db.post_bundle(post).await?;
        out.push(PostRes::from_bundle(&bundle, now));
    }
    Ok(ApiResponse::Ok(out))
}
