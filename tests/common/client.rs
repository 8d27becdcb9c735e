use actix_web::{web, App};
use std::sync::Arc;
use messagely::{
    config::EnvConfig,
    db::postgres_service::PostgresService,
    utils::token::sign_token,
};

use super::test_data;

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub config: EnvConfig,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>, config: EnvConfig) -> Self {
        TestClient { db, config }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.config.clone()))
            .configure(messagely::routes::configure_routes)
    }

    /// Registers `username` with password "password" and returns a bearer token for it.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str) -> String {
        self.db
            .register(test_data::sample_user(username))
            .await
            .expect("Failed to create user");

        sign_token(username, &self.config.secret_key, self.config.auth.token_ttl_hours)
            .expect("Failed to sign token")
    }
}
