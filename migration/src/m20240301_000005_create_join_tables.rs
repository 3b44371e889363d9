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
}

#[derive(DeriveIden)]
enum Place {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Subject {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum UserPost {
    Table,
    UserId,
    PostId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserComment {
    Table,
    UserId,
    CommentId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PostPlace {
    Table,
    PostId,
    PlaceId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PostSubject {
    Table,
    PostId,
    SubjectId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // user_post: people tagged in a post
        m.create_table(
            Table::create()
                .table(UserPost::Table)
                .col(ColumnDef::new(UserPost::UserId).string_len(8).not_null())
                .col(ColumnDef::new(UserPost::PostId).integer().not_null())
                .col(ColumnDef::new(UserPost::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_user_post")
                        .col(UserPost::UserId)
                        .col(UserPost::PostId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_post_user")
                        .from(UserPost::Table, UserPost::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_post_post")
                        .from(UserPost::Table, UserPost::PostId)
                        .to(Post::Table, Post::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // user_comment: people tagged in a comment
        m.create_table(
            Table::create()
                .table(UserComment::Table)
                .col(ColumnDef::new(UserComment::UserId).string_len(8).not_null())
                .col(ColumnDef::new(UserComment::CommentId).integer().not_null())
                .col(ColumnDef::new(UserComment::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_user_comment")
                        .col(UserComment::UserId)
                        .col(UserComment::CommentId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_comment_user")
                        .from(UserComment::Table, UserComment::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_comment_comment")
                        .from(UserComment::Table, UserComment::CommentId)
                        .to(Comment::Table, Comment::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // post_place
        m.create_table(
            Table::create()
                .table(PostPlace::Table)
                .col(ColumnDef::new(PostPlace::PostId).integer().not_null())
                .col(ColumnDef::new(PostPlace::PlaceId).integer().not_null())
                .col(ColumnDef::new(PostPlace::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_post_place")
                        .col(PostPlace::PostId)
                        .col(PostPlace::PlaceId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_place_post")
                        .from(PostPlace::Table, PostPlace::PostId)
                        .to(Post::Table, Post::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_place_place")
                        .from(PostPlace::Table, PostPlace::PlaceId)
                        .to(Place::Table, Place::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // post_subject
        m.create_table(
            Table::create()
                .table(PostSubject::Table)
                .col(ColumnDef::new(PostSubject::PostId).integer().not_null())
                .col(ColumnDef::new(PostSubject::SubjectId).integer().not_null())
                .col(ColumnDef::new(PostSubject::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_post_subject")
                        .col(PostSubject::PostId)
                        .col(PostSubject::SubjectId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_subject_post")
                        .from(PostSubject::Table, PostSubject::PostId)
                        .to(Post::Table, Post::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_subject_subject")
                        .from(PostSubject::Table, PostSubject::SubjectId)
                        .to(Subject::Table, Subject::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_user_post_post")
                .table(UserPost::Table)
                .col(UserPost::PostId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_user_comment_comment")
                .table(UserComment::Table)
                .col(UserComment::CommentId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(PostSubject::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(PostPlace::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(UserComment::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(UserPost::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
