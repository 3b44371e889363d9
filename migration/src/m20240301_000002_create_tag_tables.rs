use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Place {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Subject {
    Table,
    Id,
    Name,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Place::Table)
                .col(
                    ColumnDef::new(Place::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(Place::Name)
                        .string()
                        .not_null()
                        .unique_key()
                )
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Subject::Table)
                .col(
                    ColumnDef::new(Subject::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(Subject::Name)
                        .string()
                        .not_null()
                        .unique_key()
                )
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Subject::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Place::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
