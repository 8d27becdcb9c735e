use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::message::{MessagesRes, ReceivedMessage, SentMessage};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Claims;

/// Only the owner of a mailbox may read it.
fn ensure_correct_user(claims: &Claims, username: &str) -> Result<(), AppError> {
    if claims.username != username {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

#[get("/{username}/to")]
async fn messages_to(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    claims: web::ReqData<Claims>,
    path: web::Path<String>,
) -> ApiResult<MessagesRes<ReceivedMessage>> {
    ensure_correct_user(&claims, &path)?;
    let messages = db.messages_to(&path).await?;
    Ok(ApiResponse::Ok(MessagesRes { messages }))
}

#[get("/{username}/from")]
async fn messages_from(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    claims: web::ReqData<Claims>,
    path: web::Path<String>,
) -> ApiResult<MessagesRes<SentMessage>> {
    ensure_correct_user(&claims, &path)?;
    let messages = db.messages_from(&path).await?;
    Ok(ApiResponse::Ok(MessagesRes { messages }))
}
