//! Infrastructure layer - external I/O adapters
//!
//! This module contains all code that talks to the Kubernetes API:
//! - Kubeconfig / context resolution
//! - Release custom resource listing

pub mod kube_context;
pub mod release_store;

// Re-export commonly used types
pub use release_store::{KubeReleaseStore, ReleaseStore};
