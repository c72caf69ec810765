//! Optional-filter search: predicate fragments, their composition, and the
//! generic search service that runs a composed predicate against a store.

pub mod fragments;
pub mod ports;
pub mod predicate;
pub mod services;

pub use predicate::{Clause, Field, FieldValue, Predicate, Record, Value};
