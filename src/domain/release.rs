//! Release domain types
//!
//! Pure filtering and ordering rules for release records. Nothing in here
//! talks to the cluster.

use std::cmp::Ordering;

use crate::error::ReleaseError;

/// A recorded deployment event, projected from the cluster store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Release identifier (never empty)
    pub name: String,
    /// Version token, display only
    pub version: String,
    /// Namespace the release lives in
    pub namespace: String,
}

impl Release {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            namespace: namespace.into(),
        }
    }

    /// Case-sensitive substring match on the name only
    pub fn matches_filter(&self, filter: &str) -> bool {
        filter.is_empty() || self.name.contains(filter)
    }
}

/// Name ascending, then version ascending
pub fn release_order(a: &Release, b: &Release) -> Ordering {
    a.name
        .cmp(&b.name)
        .then_with(|| a.version.cmp(&b.version))
}

/// Keep releases whose name contains `filter` and sort them deterministically
pub fn filter_and_order(releases: Vec<Release>, filter: &str) -> Vec<Release> {
    let mut retained: Vec<Release> = releases
        .into_iter()
        .filter(|r| r.matches_filter(filter))
        .collect();
    retained.sort_by(release_order);
    retained
}

/// Pick the namespace to query.
///
/// An explicit, non-empty namespace always wins. Otherwise the caller-supplied
/// current namespace (from the kube context or config file) is used.
pub fn resolve_namespace(explicit: Option<&str>, current: &str) -> Result<String, ReleaseError> {
    let explicit = explicit.map(str::trim).filter(|ns| !ns.is_empty());
    let current = current.trim();

    match explicit {
        Some(ns) => Ok(ns.to_string()),
        None if !current.is_empty() => Ok(current.to_string()),
        None => Err(ReleaseError::NamespaceResolution {
            message: "no --namespace given and the current context has no namespace".to_string(),
        }),
    }
}
