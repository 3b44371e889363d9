use actix_web::{get, web, HttpRequest};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::IdentityRes;
use crate::utils::session::session_user;

#[get("")]
async fn current_user(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<IdentityRes> {
    let user = session_user(&req, &db).await?;
    Ok(ApiResponse::Ok(IdentityRes {
        id: user.id,
        name: user.name,
        is_authenticated: true,
    }))
}
