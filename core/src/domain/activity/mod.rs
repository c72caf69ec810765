pub mod entities;
pub mod mappers;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entities::{Activity, ActivityField};
pub use services::ActivitySearchService;
