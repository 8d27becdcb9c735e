use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::debug;

use crate::config::EnvConfig;
use crate::types::error::AppError;
use crate::utils::token::decode_token;

/// Bearer validator: a valid token puts its `Claims` into the request extensions.
pub async fn validate_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let secret = match req.app_data::<web::Data<EnvConfig>>() {
        Some(config) => config.secret_key.clone(),
        None => return Err((AppError::Unauthorized.into(), req)),
    };

    match decode_token(credentials.token(), &secret) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(e) => {
            debug!(path = req.path(), "rejected bearer token");
            Err((e.into(), req))
        }
    }
}
