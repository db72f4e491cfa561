//! Request handlers
//!
//! Thin axum adapters over `InspectionService`: they log receipt and
//! completion and shape the HTTP response.

pub mod bulk;
pub mod health;
pub mod single;
