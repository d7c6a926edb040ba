//! `releasectl get releases` - list Release resources in a namespace

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::config::CliConfig;
use crate::domain::{resolve_namespace, Release};
use crate::error::CliError;
use crate::infrastructure::{kube_context, KubeReleaseStore, ReleaseStore};
use crate::services::ReleaseQueryService;
use crate::ui;

/// Execute the get releases command
pub async fn execute(
    filter: String,
    namespace: Option<String>,
    context: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = CliConfig::load(config_path.as_deref())
        .map_err(CliError::from)
        .context("Failed to load releasectl config")?;

    let context = config.effective_context(context.as_deref());
    let kube = kube_context::connect(context.as_deref())
        .await
        .map_err(CliError::from)?;

    let current = kube_context::current_namespace(config.namespace.as_deref(), &kube.namespace);
    let namespace = resolve_namespace(namespace.as_deref(), &current).map_err(CliError::from)?;
    debug!("Resolved namespace {}", namespace);

    let service = ReleaseQueryService::new(KubeReleaseStore::new(kube.client));
    let output = list(&service, &namespace, &filter).await?;

    match output {
        Listing::Table(table) => print!("{}", table),
        Listing::Empty(lines) => {
            for line in lines {
                ui::print_info(&line);
            }
        }
    }

    Ok(())
}

/// What the command prints for one query
#[derive(Debug, PartialEq, Eq)]
pub enum Listing {
    /// Rendered table, header first
    Table(String),
    /// Notice and hint lines for an empty result
    Empty(Vec<String>),
}

/// Query releases and decide what to print
pub async fn list<S: ReleaseStore>(
    service: &ReleaseQueryService<S>,
    namespace: &str,
    filter: &str,
) -> Result<Listing, CliError> {
    let releases = service.list_releases(namespace, filter).await?;

    if releases.is_empty() {
        debug!("No releases in {}", namespace);
        return Ok(Listing::Empty(vec![
            empty_notice(namespace, filter),
            creation_hint(),
        ]));
    }

    Ok(Listing::Table(render_table(&releases)))
}

/// NAME / VERSION table, one row per release in the given order
pub fn render_table(releases: &[Release]) -> String {
    let width = releases
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$}  {}\n", "NAME", "VERSION", width = width);
    for release in releases {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            release.name,
            release.version,
            width = width
        ));
    }
    out
}

/// Notice for an empty result. Mentions the filter only when one was given.
pub fn empty_notice(namespace: &str, filter: &str) -> String {
    let suffix = if filter.is_empty() {
        String::new()
    } else {
        format!(" for filter: {}", filter.cyan())
    };
    format!("No Releases found in namespace {}{}.", namespace.cyan(), suffix)
}

/// How to get a release to show up
pub fn creation_hint() -> String {
    format!(
        "To create a release try merging code to the {} branch to trigger a release pipeline.",
        "master".cyan()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;
    use crate::infrastructure::release_store::testing::StaticReleaseStore;

    fn rows(table: &str) -> Vec<Vec<&str>> {
        table
            .lines()
            .map(|line| line.split_whitespace().collect())
            .collect()
    }

    #[test]
    fn test_render_table_header_and_rows() {
        let table = render_table(&[
            Release::new("a-app", "2.0", "team-a"),
            Release::new("b-app", "1.0", "team-a"),
        ]);

        assert_eq!(
            rows(&table),
            vec![
                vec!["NAME", "VERSION"],
                vec!["a-app", "2.0"],
                vec!["b-app", "1.0"],
            ]
        );
    }

    #[test]
    fn test_render_table_aligns_version_column() {
        let table = render_table(&[
            Release::new("a", "1", "ns"),
            Release::new("a-much-longer-name", "2", "ns"),
        ]);

        let offsets: Vec<usize> = table
            .lines()
            .map(|line| line.rfind(' ').unwrap())
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] == w[1]));
    }

    #[tokio::test]
    async fn test_list_orders_rows() {
        let service = ReleaseQueryService::new(StaticReleaseStore::with_releases(vec![
            Release::new("b-app", "1.0", "team-a"),
            Release::new("a-app", "2.0", "team-a"),
        ]));

        let listing = list(&service, "team-a", "").await.unwrap();
        let table = match listing {
            Listing::Table(table) => table,
            other => panic!("expected a table, got {:?}", other),
        };
        assert_eq!(
            rows(&table)[1..].to_vec(),
            vec![vec!["a-app", "2.0"], vec!["b-app", "1.0"]]
        );
    }

    #[tokio::test]
    async fn test_empty_result_with_filter_names_namespace_and_filter() {
        let service = ReleaseQueryService::new(StaticReleaseStore::with_releases(vec![
            Release::new("other", "1.0", "team-a"),
        ]));

        let listing = list(&service, "team-a", "myapp").await.unwrap();
        let lines = match listing {
            Listing::Empty(lines) => lines,
            other => panic!("expected an empty notice, got {:?}", other),
        };
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("team-a"));
        assert!(lines[0].contains("myapp"));
        assert!(!lines[1].is_empty());
    }

    #[test]
    fn test_empty_notice_without_filter_omits_filter_text() {
        let notice = empty_notice("team-a", "");
        assert!(notice.contains("team-a"));
        assert!(!notice.contains("filter"));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_error() {
        let service = ReleaseQueryService::new(StaticReleaseStore::failing(
            ReleaseError::StoreUnavailable {
                message: "connection refused".to_string(),
            },
        ));

        let err = list(&service, "team-a", "").await.unwrap_err();
        assert!(matches!(
            err,
            CliError::Release(ReleaseError::StoreUnavailable { .. })
        ));
    }
}
