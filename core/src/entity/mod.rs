//! sea-orm entities for the catalog tables.

pub mod activities;
pub mod suppliers;
