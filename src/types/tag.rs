use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RTagCreate {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TagRes {
    pub id: i32,
    pub name: String,
}

impl From<&entity::place::Model> for TagRes {
    fn from(p: &entity::place::Model) -> Self {
        TagRes { id: p.id, name: p.name.clone() }
    }
}

impl From<&entity::subject::Model> for TagRes {
    fn from(s: &entity::subject::Model) -> Self {
        TagRes { id: s.id, name: s.name.clone() }
    }
}
