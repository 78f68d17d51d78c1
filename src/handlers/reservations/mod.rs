pub mod create_reservation;
pub mod delete_reservation;
pub mod join_reservation;
pub mod matchmaking;
pub mod reservation_detail;
pub mod reservation_lists;
