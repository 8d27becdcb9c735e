use actix_web::{post, web};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserRegister, TokenRes};
use crate::utils::token::sign_token;

/// Registers, logs the new user in and hands back a token.
#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RUserRegister>,
) -> ApiResult<TokenRes> {
    let payload = body.into_inner();
    if payload.username.trim().is_empty() {
        return Err(AppError::Validation("username must not be empty".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("password must not be empty".into()));
    }

    let user = db.register(payload).await?;
    db.update_login_timestamp(&user.username).await?;
    let token = sign_token(&user.username, &config.secret_key, config.auth.token_ttl_hours)?;

    Ok(ApiResponse::Ok(TokenRes { token }))
}
