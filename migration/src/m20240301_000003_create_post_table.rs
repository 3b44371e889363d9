use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Post {
    Table,
    Id,
    Content,
    AuthorId,
    Timestamp,
    Image,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys after the fact, so they go inline.
        m.create_table(
            Table::create()
                .table(Post::Table)
                .col(
                    ColumnDef::new(Post::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(Post::Content)
                        .string_len(120)
                        .not_null()
                )
                .col(
                    ColumnDef::new(Post::AuthorId)
                        .string_len(8)
                        .not_null()
                )
                .col(
                    ColumnDef::new(Post::Timestamp)
                        .timestamp_with_time_zone()
                        .not_null()
                )
                .col(
                    ColumnDef::new(Post::Image)
                        .string()
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_author")
                        .from(Post::Table, Post::AuthorId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_post_author")
                .table(Post::Table)
                .col(Post::AuthorId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Post::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
