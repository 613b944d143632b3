//! carescore-advisor
//!
//! Deterministic care-plan generation. Each instrument module expands a
//! scored assessment into an ordered list of recommendations; `trend`
//! compares a patient's Braden history.
//!
//! Every function here is pure: same context in, same analysis out.

pub mod braden;
pub mod caprini;
pub mod trend;
pub mod wells;

pub use carescore_core::models::recommendation::sort_by_priority;
