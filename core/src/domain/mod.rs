pub mod activity;
pub mod common;
pub mod health;
pub mod search;
pub mod supplier;
