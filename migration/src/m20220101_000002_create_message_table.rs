use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Username,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    FromUsername,
    ToUsername,
    Body,
    SentAt,
    ReadAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Messages::Table)
                .if_not_exists()
                .col(ColumnDef::new(Messages::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Messages::FromUsername).string().not_null())
                .col(ColumnDef::new(Messages::ToUsername).string().not_null())
                .col(ColumnDef::new(Messages::Body).text().not_null())
                .col(ColumnDef::new(Messages::SentAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Messages::ReadAt).timestamp_with_time_zone().null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_messages_from_user")
                        .from(Messages::Table, Messages::FromUsername)
                        .to(Users::Table, Users::Username)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_messages_to_user")
                        .from(Messages::Table, Messages::ToUsername)
                        .to(Users::Table, Users::Username)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // Both join queries filter on one side of the pair
        m.create_index(
            Index::create()
                .name("idx_messages_from_username")
                .table(Messages::Table)
                .col(Messages::FromUsername)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_messages_to_username")
                .table(Messages::Table)
                .col(Messages::ToUsername)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Indexes go with the table
        m.drop_table(Table::drop().table(Messages::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
