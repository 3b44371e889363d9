use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Vec<UserRes>> {
    let users = db.list_users().await?;
    // password hashes never leave the db layer
    Ok(ApiResponse::Ok(users.iter().map(UserRes::from).collect()))
}
