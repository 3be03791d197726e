//! HTTP handlers for pets and the documentation bundle.

pub mod docs;
pub mod pets;
