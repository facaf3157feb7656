//! Command implementations for the `modernize` binary.

pub mod config;
pub mod detect;
pub mod process;
