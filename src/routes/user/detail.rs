use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

#[get("/{username}")]
async fn detail(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<UserRes> {
    let user = db.get_user(&path).await?;
    Ok(ApiResponse::Ok(UserRes { user }))
}
