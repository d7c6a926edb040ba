//! Command implementations

pub mod get_release;
