use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use messagely::config::{AuthConfig, EnvConfig};
use messagely::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub config: EnvConfig,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let config = get_test_config();

        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
                .with_work_factor(config.auth.work_factor)
        );

        TestContext {
            db,
            config,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        secret_key: "test_secret_key".to_string(),
        auth: AuthConfig {
            work_factor: 1,
            token_ttl_hours: 1,
        },
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use messagely::types::user::RUserRegister;

    pub fn sample_user(username: &str) -> RUserRegister {
        RUserRegister {
            username: username.to_string(),
            password: "password".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            phone: "+14155550000".to_string(),
        }
    }
}
