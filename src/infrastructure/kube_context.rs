//! Kubernetes context resolution
//!
//! Builds a client from the kubeconfig (optionally a named context) and reports
//! the namespace that context points at.

use kube::{config::KubeConfigOptions, Client, Config};
use tracing::debug;

use crate::error::ReleaseError;

/// A connected client plus the namespace its context selects
pub struct KubeContext {
    pub client: Client,
    pub namespace: String,
}

/// Create a Kubernetes client for `context`, or for the inferred config when `None`
pub async fn connect(context: Option<&str>) -> Result<KubeContext, ReleaseError> {
    let config = match context {
        Some(name) => {
            debug!("Loading kubeconfig context {}", name);
            let options = KubeConfigOptions {
                context: Some(name.to_string()),
                ..Default::default()
            };
            Config::from_kubeconfig(&options)
                .await
                .map_err(|e| ReleaseError::StoreUnavailable {
                    message: format!("Failed to load kubeconfig context {}: {}", name, e),
                })?
        }
        None => Config::infer()
            .await
            .map_err(|e| ReleaseError::StoreUnavailable {
                message: format!("Failed to infer kubeconfig: {}", e),
            })?,
    };

    let namespace = config.default_namespace.clone();

    let client = Client::try_from(config).map_err(|e| ReleaseError::StoreUnavailable {
        message: format!("Failed to create Kubernetes client: {}", e),
    })?;

    Ok(KubeContext { client, namespace })
}

/// The "current namespace": a config-file override beats the kube context
pub fn current_namespace(configured: Option<&str>, context_namespace: &str) -> String {
    configured
        .map(str::trim)
        .filter(|ns| !ns.is_empty())
        .unwrap_or(context_namespace)
        .to_string()
}
