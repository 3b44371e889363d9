pub mod current_user;
pub mod login;
pub mod logout;
