//! carescore-cli
//!
//! Command implementations behind the `carescore` binary.

pub mod commands;
pub mod config;
pub mod input;
