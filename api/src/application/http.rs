pub mod activity;
pub mod health;
pub mod query;
pub mod server;
pub mod supplier;
