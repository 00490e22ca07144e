//! Container runtime status from the local Docker daemon.
//!
//! A client is opened for each sample and dropped when the sample ends,
//! whichever way it ends.

use std::time::Duration;

use bollard::Docker;
use bollard::container::ListContainersOptions;
use bollard::image::ListImagesOptions;
use bollard::models::ContainerSummary;

use super::ProviderError;
use super::snapshot::{ContainerEntry, DockerSnapshot};

pub async fn sample(timeout: Duration) -> Result<DockerSnapshot, ProviderError> {
    match tokio::time::timeout(timeout, query()).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout {
            what: "docker daemon",
            after: timeout,
        }),
    }
}

async fn query() -> Result<DockerSnapshot, ProviderError> {
    let docker = Docker::connect_with_local_defaults()?;

    let containers = docker
        .list_containers(Some(ListContainersOptions::<String> {
            all: true,
            ..Default::default()
        }))
        .await?;
    let images = docker
        .list_images(Some(ListImagesOptions::<String>::default()))
        .await?;

    let entries: Vec<ContainerEntry> = containers.iter().map(container_entry).collect();
    Ok(DockerSnapshot::from_entries(&entries, images.len()))
}

fn container_entry(summary: &ContainerSummary) -> ContainerEntry {
    let name = summary
        .names
        .as_ref()
        .and_then(|names| names.first())
        .map(|name| name.trim_start_matches('/').to_string())
        .unwrap_or_default();
    ContainerEntry {
        name,
        state: summary.state.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_strips_daemon_name_prefix() {
        let summary = ContainerSummary {
            names: Some(vec!["/redis-cache".to_string(), "/alias".to_string()]),
            state: Some("exited".to_string()),
            ..Default::default()
        };
        let entry = container_entry(&summary);
        assert_eq!(entry.name, "redis-cache");
        assert_eq!(entry.label(), "redis-cache (exited)");
        assert!(!entry.is_running());
    }

    #[test]
    fn entry_tolerates_missing_fields() {
        let entry = container_entry(&ContainerSummary::default());
        assert_eq!(entry.name, "");
        assert_eq!(entry.state, "");
    }
}
