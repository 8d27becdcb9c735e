use actix_web::{post, web};
use std::sync::Arc;
use tracing::warn;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, TokenRes};
use crate::utils::token::sign_token;

/// {username, password} => {token}, stamping last_login_at on the way.
#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RUserLogin>,
) -> ApiResult<TokenRes> {
    if !db.authenticate(&body.username, &body.password).await? {
        warn!(username = %body.username, "failed login");
        return Err(AppError::InvalidCredentials);
    }

    db.update_login_timestamp(&body.username).await?;
    let token = sign_token(&body.username, &config.secret_key, config.auth.token_ttl_hours)?;

    Ok(ApiResponse::Ok(TokenRes { token }))
}
