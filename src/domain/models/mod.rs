pub mod booking;
pub mod feed;
