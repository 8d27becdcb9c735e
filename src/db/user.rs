use crate::db::postgres_service::PostgresService;
use crate::{
    types::{
        error::AppError,
        user::{PublicUser, RUserRegister, UserDetail},
    },
    utils::token::{hash_password, verify_password},
};
use actix_web::web;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::{debug, info};

impl PostgresService {
    /// Signup: hash the password and store the user. A taken username comes
    /// back from the unique constraint as `AppError::AlreadyExists`.
    pub async fn register(&self, payload: RUserRegister) -> Result<UserDetail, AppError> {
        let work_factor = self.work_factor;
        let password = payload.password;
        let hashed = web::block(move || hash_password(&password, work_factor)).await??;

        let user = UserActive {
            username: Set(payload.username),
            password: Set(hashed),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            phone: Set(payload.phone),
            join_at: Set(Utc::now()),
            last_login_at: Set(None),
        }
        .insert(&self.database_connection)
        .await?;

        info!(username = %user.username, "registered user");
        Ok(user.into())
    }

    /// Is this username/password pair valid? An unknown username is just `false`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let stored: Option<String> = User::find_by_id(username.to_owned())
            .select_only()
            .column(Column::Password)
            .into_tuple::<String>()
            .one(&self.database_connection)
            .await?;

        // Unknown users still run a verify so timing doesn't reveal existence
        let exists = stored.is_some();
        let hash = match stored {
            Some(hash) => hash,
            None => {
                debug!(username, "authenticate: no such user");
                self.dummy_hash().await?
            }
        };

        let password = password.to_owned();
        let valid = web::block(move || verify_password(&password, &hash)).await?;
        Ok(exists && valid)
    }

    pub async fn update_login_timestamp(&self, username: &str) -> Result<(), AppError> {
        let res = User::update_many()
            .col_expr(Column::LastLoginAt, Expr::value(Utc::now()))
            .filter(Column::Username.eq(username))
            .exec(&self.database_connection)
            .await?;

        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn get_user(&self, username: &str) -> Result<UserDetail, AppError> {
        Ok(User::find_by_id(username.to_owned())
            .select_only()
            .columns([
                Column::Username,
                Column::FirstName,
                Column::LastName,
                Column::Phone,
                Column::JoinAt,
                Column::LastLoginAt,
            ])
            .into_model::<UserDetail>()
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Could not find user with username {username}"))
            })?)
    }

    pub async fn all_users(&self) -> Result<Vec<PublicUser>, AppError> {
        Ok(User::find()
            .select_only()
            .columns([Column::Username, Column::FirstName, Column::LastName, Column::Phone])
            .order_by_asc(Column::Username)
            .into_model::<PublicUser>()
            .all(&self.database_connection)
            .await?)
    }
}
