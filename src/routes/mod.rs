use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;

pub mod auth;
pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_token);

    // Malformed bodies get the same JSON error shape as everything else
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/login").service(auth::login::login));
    cfg.service(web::scope("/register").service(auth::register::register));
    cfg.service(
        web::scope("/users")
            .service(user::list::list)
            .service(user::messages::messages_to)
            .service(user::messages::messages_from)
            .service(user::detail::detail)
            .wrap(user_auth)
    );
}
