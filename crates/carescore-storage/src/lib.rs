//! carescore-storage
//!
//! The repository interface the application layer injects into the core,
//! an in-memory implementation, and the JSON backup bundle.

pub mod error;
pub mod memory;
pub mod repository;
pub mod state;
