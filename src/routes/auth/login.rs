use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    post, web, HttpResponse,
};
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::session::{IdentityRes, RLogin};
use crate::utils::session::SESSION_COOKIE;
use crate::utils::token::{construct_cookie, encrypt, new_secret, verify};

pub const SESSION_DAYS: i64 = 7;

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RLogin>,
) -> Result<HttpResponse, AppError> {
    // Unknown id and wrong password are indistinguishable on purpose.
    let user = db
        .get_user_by_id(&body.id)
        .await
        .map_err(|_| AppError::Unauthorized)?;
    if !verify(&body.password, &user.password).unwrap_or(false) {
        return Err(AppError::Unauthorized);
    }

    let secret = new_secret();
    let hash = encrypt(&secret)
        .map_err(|_| AppError::Internal("Failed to hash session secret".to_string()))?;
    let expires_at = Utc::now() + Duration::days(SESSION_DAYS);
    let session_id = db.create_session(&user.id, hash, expires_at).await?;

    let cookie = Cookie::build(SESSION_COOKIE, construct_cookie(&session_id, &secret))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::days(SESSION_DAYS))
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(IdentityRes {
        id: user.id,
        name: user.name,
        is_authenticated: true,
    }))
}
