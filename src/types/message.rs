use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::types::user::PublicUser;

/// One row of a message joined to the other party's user row.
#[derive(Debug, FromQueryResult)]
pub struct MessageRow {
    pub id: i32,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub counterpart_username: String,
    pub counterpart_first_name: String,
    pub counterpart_last_name: String,
    pub counterpart_phone: String,
}

impl MessageRow {
    fn counterpart(&self) -> PublicUser {
        PublicUser {
            username: self.counterpart_username.clone(),
            first_name: self.counterpart_first_name.clone(),
            last_name: self.counterpart_last_name.clone(),
            phone: self.counterpart_phone.clone(),
        }
    }
}

/// A message the user sent, with the recipient nested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub id: i32,
    pub to_user: PublicUser,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

impl From<MessageRow> for SentMessage {
    fn from(row: MessageRow) -> Self {
        Self {
            to_user: row.counterpart(),
            id: row.id,
            body: row.body,
            sent_at: row.sent_at,
            read_at: row.read_at,
        }
    }
}

/// A message the user received, with the sender nested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub id: i32,
    pub from_user: PublicUser,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

impl From<MessageRow> for ReceivedMessage {
    fn from(row: MessageRow) -> Self {
        Self {
            from_user: row.counterpart(),
            id: row.id,
            body: row.body,
            sent_at: row.sent_at,
            read_at: row.read_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessagesRes<T> {
    pub messages: Vec<T>,
}
