pub mod email;
pub mod factory;
pub mod feeds;
pub mod repositories;
pub mod webhook;
