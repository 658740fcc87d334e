//! Core utilities shared by the field store and the solver passes.

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;
