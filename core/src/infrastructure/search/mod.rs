pub mod condition;

pub use condition::build_condition;
