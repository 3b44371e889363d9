use actix_web::{post, web, HttpRequest};
use chrono::Utc;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::post::{DBPostCreate, PostRes, RPostCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::session::session_user;

pub const MAX_CONTENT_LEN: usize = 120;

#[post("")]
async fn create(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RPostCreate>,
) -> ApiResult<PostRes> {
    // Posting requires a session; the author is always the session user
    // and any client-supplied id is discarded.
    let author = session_user(&req, &db).await?;

    if body.content.is_empty() {
        return Err(AppError::Validation("content is required".to_string()));
    }
    if body.content.chars().count() > MAX_CONTENT_LEN {
        return Err(AppError::Validation(format!(
            "content is limited to {} characters",
            MAX_CONTENT_LEN
        )));
    }

    let mut place_ids = Vec::new();
    for name in body.places.clone().unwrap_or_default() {
        let place = db.get_or_create_place(&name).await?;
        if !place_ids.contains(&place.id) {
            place_ids.push(place.id);
        }
    }
    let mut subject_ids = Vec::new();
    for name in body.subjects.clone().unwrap_or_default() {
        let subject = db.get_or_create_subject(&name).await?;
        if !subject_ids.contains(&subject.id) {
            subject_ids.push(subject.id);
        }
    }
    let mut people_ids = Vec::new();
    for user_id in body.people.clone().unwrap_or_default() {
        let tagged = db.get_user_by_id(&user_id).await?;
        if !people_ids.contains(&tagged.id) {
            people_ids.push(tagged.id);
        }
    }

    let post_id = db
        .create_post(DBPostCreate {
            author_id: author.id,
            content: body.content.clone(),
            image: body.image.clone(),
            place_ids,
            subject_ids,
            people_ids,
        })
        .await?;

    let post = db.get_post(post_id).await?;
    let bundle = db.post_bundle(post).await?;
    Ok(ApiResponse::Created(PostRes::from_bundle(&bundle, Utc::now())))
}
