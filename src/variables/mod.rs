//! # Variables Module
//!
//! Run/instrument variable submission: the form-validation engine, the
//! conflict check against upcoming runs, and storage of accepted
//! variable sets.

pub mod conflicts;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::variables_routes;
