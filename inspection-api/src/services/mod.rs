//! Service implementations
//!
//! Store backends and the inspection service that drives them

pub mod inspection_service;
pub mod memory_store;
pub mod redis_store;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use inspection_service::InspectionService;
pub use memory_store::InMemoryDefectStore;
pub use redis_store::RedisDefectStore;
