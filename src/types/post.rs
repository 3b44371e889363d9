use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::post::PostBundle;
use crate::types::comment::CommentRes;
use crate::types::tag::TagRes;
use crate::types::user::UserRes;
use crate::utils::time::humanize;

/// Creation body. A client-supplied `id` is accepted but always ignored;
/// the author comes from the session, never from the payload.
#[derive(Serialize, Deserialize, Debug)]
pub struct RPostCreate {
    pub id: Option<i32>,
    pub content: String,
    pub image: Option<String>,
    pub places: Option<Vec<String>>,
    pub subjects: Option<Vec<String>>,
    pub people: Option<Vec<String>>,
}

/// What the db layer actually writes: tag names already resolved to ids.
pub struct DBPostCreate {
    pub author_id: String,
    pub content: String,
    pub image: Option<String>,
    pub place_ids: Vec<i32>,
    pub subject_ids: Vec<i32>,
    pub people_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PostRes {
    pub id: i32,
    pub content: String,
    pub image: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub when: String,
    pub recent: bool,
    pub author: UserRes,
    pub places: Vec<TagRes>,
    pub subjects: Vec<TagRes>,
    pub people: Vec<UserRes>,
    pub comments: Vec<CommentRes>,
}

impl PostRes {
    pub fn from_bundle(bundle: &PostBundle, now: DateTime<Utc>) -> Self {
        let ago = humanize(bundle.post.timestamp, now);
        PostRes {
            id: bundle.post.id,
            content: bundle.post.content.clone(),
            image: bundle.post.image.clone(),
            timestamp: bundle.post.timestamp,
            when: ago.label,
            recent: ago.recent,
            author: UserRes::from(&bundle.author),
            places: bundle.places.iter().map(TagRes::from).collect(),
            subjects: bundle.subjects.iter().map(TagRes::from).collect(),
            people: bundle.people.iter().map(UserRes::from).collect(),
            comments: bundle
                .comments
                .iter()
                .map(|c| CommentRes::from_bundle(c, now))
                .collect(),
        }
    }
}
