use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RLogin {
    pub id: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct IdentityRes {
    pub id: String,
    pub name: String,
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
}
