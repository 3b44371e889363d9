use entity::user;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserCreate {
    pub id: String,
    pub name: String,
    pub password: String,
}

/// Payload handed to the db layer; `password` is already an argon2 hash.
#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub id: String,
    pub name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserRes {
    pub id: String,
    pub name: String,
}

impl From<&user::Model> for UserRes {
    fn from(u: &user::Model) -> Self {
        UserRes {
            id: u.id.clone(),
            name: u.name.clone(),
        }
    }
}
