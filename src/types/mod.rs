pub mod comment;
pub mod error;
pub mod post;
pub mod response;
pub mod session;
pub mod tag;
pub mod user;
