use std::sync::Arc;
use tagline::db::database_service::DatabaseService;
use uuid::Uuid;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // Unique shared-cache name so every pooled connection sees the same
        // in-memory database, and parallel tests never collide.
        let db_url = format!(
            "sqlite:file:{}?mode=memory&cache=shared",
            Uuid::new_v4().simple()
        );

        let db = Arc::new(
            DatabaseService::new(&db_url)
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_user() -> Value {
        json!({
            "id": "noah",
            "name": "Noah",
            "password": "hunter2"
        })
    }

    pub fn sample_user_with_id(id: &str) -> Value {
        json!({
            "id": id,
            "name": format!("User {}", id),
            "password": "hunter2"
        })
    }
}
