use actix_web::HttpRequest;
use chrono::Utc;
use entity::user;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::utils::token::{extract_cookie_parts, verify};

pub const SESSION_COOKIE: &str = "session";

/// Resolve the session cookie to its user. Expired rows are deleted on
/// sight. Every failure mode collapses to Unauthorized.
pub async fn session_user(
    req: &HttpRequest,
    db: &DatabaseService,
) -> Result<user::Model, AppError> {
    let cookie = req.cookie(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;
    let (session_id, secret) =
        extract_cookie_parts(cookie.value()).ok_or(AppError::Unauthorized)?;

    let session = db
        .get_session(session_id)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    if session.expires_at < Utc::now() {
        let _ = db.delete_session(session_id).await;
        return Err(AppError::Unauthorized);
    }
    if !verify(&secret, &session.token).unwrap_or(false) {
        return Err(AppError::Unauthorized);
    }

    db.get_user_by_id(&session.user_id)
        .await
        .map_err(|_| AppError::Unauthorized)
}
