use actix_web::web;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::sync::OnceLock;
use tracing::info;

use crate::config::AuthConfig;
use crate::types::error::AppError;
use crate::utils::token::hash_password;

/// Verified against when a username is unknown, so both paths pay for one argon2 run.
const DUMMY_PASSWORD: &str = "no-such-user";

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) database_connection: DatabaseConnection,
    pub(crate) work_factor: u32,
    dummy_hash: OnceLock<String>,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to PostgreSQL...");
        let database_connection = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Connected to PostgreSQL.");
        Ok(Self {
            database_connection,
            work_factor: AuthConfig::default().work_factor,
            dummy_hash: OnceLock::new(),
        })
    }

    /// Argon2 iteration count for passwords hashed from now on.
    pub fn with_work_factor(mut self, work_factor: u32) -> Self {
        self.work_factor = work_factor;
        self.dummy_hash = OnceLock::new();
        self
    }

    /// Hash at the current work factor, computed once off the worker thread.
    pub(crate) async fn dummy_hash(&self) -> Result<String, AppError> {
        if let Some(hash) = self.dummy_hash.get() {
            return Ok(hash.clone());
        }
        let work_factor = self.work_factor;
        let hash = web::block(move || hash_password(DUMMY_PASSWORD, work_factor)).await??;
        Ok(self.dummy_hash.get_or_init(|| hash).clone())
    }
}
