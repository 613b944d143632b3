//! carescore-core
//!
//! Pure domain types shared by the scoring, advice, storage and export crates.
//! No scoring logic lives here. This is the vocabulary of the Carescore system.

pub mod error;
pub mod models;
