//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod decision;

pub use decision::evaluate;
