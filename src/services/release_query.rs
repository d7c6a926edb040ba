//! Release query service
//!
//! Fetches the raw release list for a namespace and turns it into the ordered,
//! filtered sequence the command renders.

use tracing::debug;

use crate::domain::{filter_and_order, Release};
use crate::error::ReleaseError;
use crate::infrastructure::ReleaseStore;

/// Filters and orders releases on top of a [`ReleaseStore`]
pub struct ReleaseQueryService<S> {
    store: S,
}

impl<S: ReleaseStore> ReleaseQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Releases in `namespace` whose name contains `filter`, sorted by name then version.
    ///
    /// Store errors are returned as-is. An empty result is not an error.
    pub async fn list_releases(
        &self,
        namespace: &str,
        filter: &str,
    ) -> Result<Vec<Release>, ReleaseError> {
        let releases = self.store.fetch_releases(namespace).await?;
        let fetched = releases.len();

        let ordered = filter_and_order(releases, filter);
        debug!(
            "{} of {} releases in {} matched filter {:?}",
            ordered.len(),
            fetched,
            namespace,
            filter
        );

        Ok(ordered)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::release_store::testing::StaticReleaseStore;
    use tokio_test::{assert_err, assert_ok};

    fn sample() -> Vec<Release> {
        vec![
            Release::new("b-app", "1.0", "team-a"),
            Release::new("a-app", "2.0", "team-a"),
            Release::new("myapp-api", "0.3.0", "team-a"),
            Release::new("myapp-web", "0.1.0", "team-a"),
            Release::new("myapp-api", "0.2.0", "team-a"),
        ]
    }

    #[tokio::test]
    async fn test_empty_filter_returns_everything_sorted() {
        let service = ReleaseQueryService::new(StaticReleaseStore::with_releases(sample()));

        let releases = assert_ok!(service.list_releases("team-a", "").await);
        let names: Vec<&str> = releases.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["a-app", "b-app", "myapp-api", "myapp-api", "myapp-web"]
        );
        assert_eq!(releases[2].version, "0.2.0");
        assert_eq!(releases[3].version, "0.3.0");
        assert_eq!(service.store().calls(), 1);
    }

    #[tokio::test]
    async fn test_filter_keeps_matching_names() {
        let service = ReleaseQueryService::new(StaticReleaseStore::with_releases(sample()));

        let releases = assert_ok!(service.list_releases("team-a", "myapp").await);
        assert_eq!(releases.len(), 3);
        assert!(releases.iter().all(|r| r.name.contains("myapp")));
    }

    #[tokio::test]
    async fn test_filter_does_not_match_version() {
        let service = ReleaseQueryService::new(StaticReleaseStore::with_releases(sample()));

        let releases = assert_ok!(service.list_releases("team-a", "0.3").await);
        assert!(releases.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_calls_give_identical_order() {
        let service = ReleaseQueryService::new(StaticReleaseStore::with_releases(sample()));

        let first = assert_ok!(service.list_releases("team-a", "").await);
        let second = assert_ok!(service.list_releases("team-a", "").await);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_store_is_not_an_error() {
        let service = ReleaseQueryService::new(StaticReleaseStore::with_releases(vec![]));

        let releases = assert_ok!(service.list_releases("team-a", "myapp").await);
        assert!(releases.is_empty());
    }

    #[tokio::test]
    async fn test_store_error_is_propagated_unchanged() {
        let original = ReleaseError::NotFound {
            namespace: "team-a".to_string(),
        };
        let service = ReleaseQueryService::new(StaticReleaseStore::failing(original.clone()));

        let err = assert_err!(service.list_releases("team-a", "").await);
        assert_eq!(err, original);
    }
}
