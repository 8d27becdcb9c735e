use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    message::{MessageRow, ReceivedMessage, SentMessage},
};
use chrono::Utc;
use entity::message::{
    ActiveModel as MessageActive, Column, Entity as Message, Model as MessageModel, Relation,
};
use entity::user;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select, Set,
};

/// Message columns plus the user on the other end of `relation`, aliased
/// to the `counterpart_*` names `MessageRow` reads.
fn with_counterpart(relation: Relation) -> Select<Message> {
    Message::find()
        .select_only()
        .columns([Column::Id, Column::Body, Column::SentAt, Column::ReadAt])
        .column_as(user::Column::Username, "counterpart_username")
        .column_as(user::Column::FirstName, "counterpart_first_name")
        .column_as(user::Column::LastName, "counterpart_last_name")
        .column_as(user::Column::Phone, "counterpart_phone")
        .join(JoinType::InnerJoin, relation.def())
}

impl PostgresService {
    /// Messages sent by `username`, each carrying its recipient.
    pub async fn messages_from(&self, username: &str) -> Result<Vec<SentMessage>, AppError> {
        let rows = with_counterpart(Relation::Recipient)
            .filter(Column::FromUsername.eq(username))
            .order_by_asc(Column::Id)
            .into_model::<MessageRow>()
            .all(&self.database_connection)
            .await?;

        Ok(rows.into_iter().map(SentMessage::from).collect())
    }

    /// Messages sent to `username`, each carrying its sender.
    pub async fn messages_to(&self, username: &str) -> Result<Vec<ReceivedMessage>, AppError> {
        let rows = with_counterpart(Relation::Sender)
            .filter(Column::ToUsername.eq(username))
            .order_by_asc(Column::Id)
            .into_model::<MessageRow>()
            .all(&self.database_connection)
            .await?;

        Ok(rows.into_iter().map(ReceivedMessage::from).collect())
    }

    pub async fn create_message(&self, from: &str, to: &str, body: &str) -> Result<MessageModel, AppError> {
        Ok(MessageActive {
            from_username: Set(from.to_owned()),
            to_username: Set(to.to_owned()),
            body: Set(body.to_owned()),
            sent_at: Set(Utc::now()),
            read_at: Set(None),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }
}
