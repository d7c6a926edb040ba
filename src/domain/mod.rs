//! Domain layer - pure business logic
//!
//! Types and functions here do no I/O and can be unit tested without a cluster.

pub mod release;

pub use release::{filter_and_order, resolve_namespace, Release};
