pub mod mappers;
pub mod repositories;

pub use repositories::activity_repository::PostgresActivityRepository;
