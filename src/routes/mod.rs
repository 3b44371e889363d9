use actix_web::web;

pub mod auth;
pub mod comment;
pub mod place;
pub mod post;
pub mod subject;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/login").service(auth::login::login));
    cfg.service(web::scope("/logout").service(auth::logout::logout));
    cfg.service(web::scope("/current-user").service(auth::current_user::current_user));

    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/user")
                    .service(user::create::create)
                    .service(user::list::list)
                    .service(user::get::get)
                    .service(user::delete::delete),
            )
            .service(
                web::scope("/post")
                    .service(post::create::create)
                    .service(post::list::list)
                    .service(post::get::get),
            )
            .service(
                web::scope("/comment")
                    .service(comment::create::create)
                    .service(comment::list::list),
            )
            .service(
                web::scope("/place")
                    .service(place::create::create)
                    .service(place::list::list),
            )
            .service(
                web::scope("/subject")
                    .service(subject::create::create)
                    .service(subject::list::list),
            ),
    );
}
