use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Body of `POST /register`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserRegister {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Body of `POST /login`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserLogin {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenRes {
    pub token: String,
}

/// The fields anyone may see about a user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PublicUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct UserDetail {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<entity::user::Model> for UserDetail {
    fn from(m: entity::user::Model) -> Self {
        Self {
            username: m.username,
            first_name: m.first_name,
            last_name: m.last_name,
            phone: m.phone,
            join_at: m.join_at,
            last_login_at: m.last_login_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UsersRes {
    pub users: Vec<PublicUser>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserRes {
    pub user: UserDetail,
}
