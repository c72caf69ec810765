pub mod activity;
pub mod catalog;
pub mod db;
pub mod health;
pub mod memory;
pub mod search;
pub mod supplier;
