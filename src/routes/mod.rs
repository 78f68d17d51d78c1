use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod messages;
pub mod profile;
pub mod reservations;
pub mod sport_centers;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/auth")
            .service(auth::register)
            .service(auth::login),
    );

    // Profile routes (require authentication)
    cfg.service(
        web::scope("/profile")
            .wrap(AuthMiddleware)
            .service(profile::update_profile)
            .service(profile::get_profile),
    );

    // Facility directory (require authentication)
    cfg.service(
        web::scope("/sport_centers")
            .wrap(AuthMiddleware)
            .service(sport_centers::list_centers)
            .service(sport_centers::get_center),
    );

    // Booking, matchmaking and scoring (require authentication).
    // Fixed segments are registered before the `{reservation_id}` routes.
    cfg.service(
        web::scope("/reservations")
            .wrap(AuthMiddleware)
            .service(reservations::create)
            .service(reservations::open_list)
            .service(reservations::search)
            .service(reservations::mine)
            .service(reservations::history)
            .service(reservations::future_joint)
            .service(reservations::score)
            .service(reservations::score_confirm)
            .service(reservations::join)
            .service(reservations::detail)
            .service(reservations::remove),
    );

    // Notification log (require authentication)
    cfg.service(
        web::scope("/messages")
            .wrap(AuthMiddleware)
            .service(messages::unread_count)
            .service(messages::mark_read)
            .service(messages::list_messages),
    );
}
