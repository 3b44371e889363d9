use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub content: String,
    pub author_id: String, // FK -> user.id
    pub timestamp: DateTimeUtc,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to   = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,

    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

// Tagged people, via the user_post join table. The author is a plain FK and
// is loaded explicitly, so find_related here only ever means tags.
impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_post::Relation::User.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_post::Relation::Post.def().rev())
    }
}

impl Related<super::place::Entity> for Entity {
    fn to() -> RelationDef {
        super::post_place::Relation::Place.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::post_place::Relation::Post.def().rev())
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        super::post_subject::Relation::Subject.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::post_subject::Relation::Post.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
