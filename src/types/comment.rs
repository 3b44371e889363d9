use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::comment::CommentBundle;
use crate::types::user::UserRes;
use crate::utils::time::humanize;

#[derive(Serialize, Deserialize, Debug)]
pub struct RCommentCreate {
    pub post: i32,
    pub content: String,
    pub people: Option<Vec<String>>,
}

pub struct DBCommentCreate {
    pub post_id: i32,
    pub author_id: String,
    pub content: String,
    pub people_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CommentRes {
    pub id: i32,
    pub post: i32,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub when: String,
    pub recent: bool,
    pub author: UserRes,
    pub people: Vec<UserRes>,
}

impl CommentRes {
    pub fn from_bundle(bundle: &CommentBundle, now: DateTime<Utc>) -> Self {
        let ago = humanize(bundle.comment.timestamp, now);
        CommentRes {
            id: bundle.comment.id,
            post: bundle.comment.post_id,
            content: bundle.comment.content.clone(),
            timestamp: bundle.comment.timestamp,
            when: ago.label,
            recent: ago.recent,
            author: UserRes::from(&bundle.author),
            people: bundle.people.iter().map(UserRes::from).collect(),
        }
    }
}
