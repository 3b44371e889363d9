use actix_web::{post, web, HttpRequest};
use chrono::Utc;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::comment::{CommentRes, DBCommentCreate, RCommentCreate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::session::session_user;

#[post("")]
async fn create(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RCommentCreate>,
) -> ApiResult<CommentRes> {
    // Same gate as posts: the author can only come from the session.
    let author = session_user(&req, &db).await?;

    if body.content.is_empty() {
        return Err(AppError::Validation("content is required".to_string()));
    }
    let post = db.get_post(body.post).await?;

    let mut people_ids = Vec::new();
    for user_id in body.people.clone().unwrap_or_default() {
        let tagged = db.get_user_by_id(&user_id).await?;
        if !people_ids.contains(&tagged.id) {
            people_ids.push(tagged.id);
        }
    }

    let comment_id = db
        .create_comment(DBCommentCreate {
            post_id: post.id,
            author_id: author.id,
            content: body.content.clone(),
            people_ids,
        })
        .await?;

    let comment = db.get_comment(comment_id).await?;
    let bundle = db.comment_bundle(comment).await?;
    Ok(ApiResponse::Created(CommentRes::from_bundle(&bundle, Utc::now())))
}
