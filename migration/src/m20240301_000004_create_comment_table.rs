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
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    PostId,
    AuthorId,
    Timestamp,
    Content,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Comment::Table)
                .col(
                    ColumnDef::new(Comment::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(Comment::PostId)
                        .integer()
                        .not_null()
                )
                .col(
                    ColumnDef::new(Comment::AuthorId)
                        .string_len(8)
                        .not_null()
                )
                .col(
                    ColumnDef::new(Comment::Timestamp)
                        .timestamp_with_time_zone()
                        .not_null()
                )
                .col(
                    ColumnDef::new(Comment::Content)
                        .string()
                        .not_null()
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comment_post")
                        .from(Comment::Table, Comment::PostId)
                        .to(Post::Table, Post::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comment_author")
                        .from(Comment::Table, Comment::AuthorId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_comment_post")
                .table(Comment::Table)
                .col(Comment::PostId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Comment::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
