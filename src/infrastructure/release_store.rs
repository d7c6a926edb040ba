//! Release store client
//!
//! Lists `jenkins.io/v1` Release custom resources in one namespace and projects
//! them into domain [`Release`] values. No filtering, no ordering, no retries.

use kube::{
    api::{Api, ListParams},
    Client, CustomResource, ResourceExt,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Release;
use crate::error::ReleaseError;

/// Spec of the Release custom resource. Fields we don't display are ignored.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize)]
#[kube(
    group = "jenkins.io",
    version = "v1",
    kind = "Release",
    root = "ReleaseResource",
    plural = "releases",
    namespaced,
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Raw, namespace-scoped list query for releases
pub trait ReleaseStore {
    /// Every release visible in `namespace`, in whatever order the store returns
    async fn fetch_releases(&self, namespace: &str) -> Result<Vec<Release>, ReleaseError>;
}

/// Release store backed by the Kubernetes API
pub struct KubeReleaseStore {
    client: Client,
}

impl KubeReleaseStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ReleaseStore for KubeReleaseStore {
    async fn fetch_releases(&self, namespace: &str) -> Result<Vec<Release>, ReleaseError> {
        let api: Api<ReleaseResource> = Api::namespaced(self.client.clone(), namespace);

        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|e| classify_error(namespace, e))?;

        debug!("Fetched {} Release resources from {}", list.items.len(), namespace);

        Ok(list
            .into_iter()
            .map(|resource| to_release(resource, namespace))
            .collect())
    }
}

/// Project a cluster object onto the domain type.
///
/// Falls back to the object name when `spec.name` is blank, and to the queried
/// namespace when the object carries none.
pub fn to_release(resource: ReleaseResource, queried_namespace: &str) -> Release {
    let name = if resource.spec.name.trim().is_empty() {
        resource.name_any()
    } else {
        resource.spec.name.clone()
    };
    let namespace = resource
        .namespace()
        .unwrap_or_else(|| queried_namespace.to_string());

    Release::new(name, resource.spec.version, namespace)
}

/// 404 from the API means the namespace (or the Release type) is missing.
/// Everything else is a store failure.
pub fn classify_error(namespace: &str, err: kube::Error) -> ReleaseError {
    match err {
        kube::Error::Api(response) if response.code == 404 => ReleaseError::NotFound {
            namespace: namespace.to_string(),
        },
        other => ReleaseError::StoreUnavailable {
            message: other.to_string(),
        },
    }
}
