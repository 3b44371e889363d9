use actix_web::{cookie::Cookie, get, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::utils::session::SESSION_COOKIE;
use crate::utils::token::extract_cookie_parts;

#[get("")]
async fn logout(req: HttpRequest, db: web::Data<Arc<DatabaseService>>) -> HttpResponse {
    // Best effort: a missing or mangled cookie still logs you out.
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Some((session_id, _)) = extract_cookie_parts(cookie.value()) {
            let _ = db.delete_session(session_id).await;
        }
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();
    HttpResponse::Ok().cookie(removal).finish()
}
