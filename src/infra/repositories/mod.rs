pub mod postgres_booking_repo;
pub mod postgres_feed_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_feed_repo;
