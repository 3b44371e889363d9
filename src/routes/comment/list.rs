use actix_web::{get, web};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::comment::CommentRes;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Deserialize)]
pub struct CommentQuery {
    pub post: Option<i32>,
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<CommentQuery>,
) -> ApiResult<Vec<CommentRes>> {
    let now = Utc::now();
    let comments = db.list_comments(query.post).await?;
    let mut out = Vec::with_capacity(comments.len());
    for comment in comments {
        let bundle = db.comment_bundle(comment).await?;
        out.push(CommentRes::from_bundle(&bundle, now));
    }
    Ok(ApiResponse::Ok(out))
}
