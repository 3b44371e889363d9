use actix_web::{web, App};
use std::sync::Arc;
use tagline::{
    db::database_service::DatabaseService,
    types::user::DBUserCreate,
    utils::token::encrypt,
};

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(tagline::routes::configure_routes)
    }

    /// Seed a user straight through the db layer, password properly hashed.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, id: &str, password: &str) -> String {
        let hash = encrypt(password).expect("Failed to hash password");
        self.db
            .create_user(DBUserCreate {
                id: id.to_string(),
                name: format!("User {}", id),
                password: hash,
            })
            .await
            .expect("Failed to create user")
    }
}
