pub mod comment;
pub mod database_service;
pub mod post;
pub mod session;
pub mod tag;
pub mod user;
