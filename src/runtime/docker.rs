//! Docker implementation of [`ContainerSource`] backed by bollard

use anyhow::{Context, Result};
use bollard::Docker;
use bollard::container::ListContainersOptions;
use bollard::errors::Error as BollardError;
use bollard::models::{ContainerSummary, Port};

use super::{ContainerRecord, ContainerSource, PortRecord, SourceError};

/// Lists containers from the local Docker daemon.
pub struct DockerSource {
    docker: Docker,
}

impl DockerSource {
    /// Connect using the environment (`DOCKER_HOST` or the platform socket)
    /// and negotiate the API version with the daemon.
    pub async fn connect() -> Result<Self> {
        let docker = Docker::connect_with_local_defaults()
            .context("Failed to create Docker client from environment")?;
        let docker = docker
            .negotiate_version()
            .await
            .context("Failed to negotiate Docker API version")?;
        tracing::info!("Connected to Docker (API {:?})", docker.client_version());
        Ok(Self { docker })
    }
}

impl ContainerSource for DockerSource {
    async fn list_running(&self) -> Result<Vec<ContainerRecord>, SourceError> {
        // Default options: running containers only, no filters
        let summaries = self
            .docker
            .list_containers(Some(ListContainersOptions::<String>::default()))
            .await
            .map_err(classify_error)?;

        Ok(summaries.into_iter().map(ContainerRecord::from).collect())
    }
}

fn classify_error(err: BollardError) -> SourceError {
    match err {
        BollardError::DockerResponseServerError {
            status_code,
            message,
        } => SourceError::Rejected {
            status: status_code,
            message,
        },
        // Connection failures surface as HyperLegacyError from the pooled client
        BollardError::RequestTimeoutError
        | BollardError::IOError { .. }
        | BollardError::HyperResponseError { .. }
        | BollardError::HyperLegacyError { .. } => SourceError::Unavailable(err.to_string()),
        other => SourceError::Other(other.to_string()),
    }
}

impl From<Port> for PortRecord {
    fn from(value: Port) -> Self {
        PortRecord {
            ip: value.ip.unwrap_or_default(),
            private_port: value.private_port,
            public_port: value.public_port.unwrap_or(0),
        }
    }
}

impl From<ContainerSummary> for ContainerRecord {
    fn from(value: ContainerSummary) -> Self {
        ContainerRecord {
            id: value.id.unwrap_or_default(),
            image: value.image.unwrap_or_default(),
            created: value.created.unwrap_or(0),
            ports: value
                .ports
                .unwrap_or_default()
                .into_iter()
                .map(PortRecord::from)
                .collect(),
            status: value.status.unwrap_or_default(),
            names: value.names.unwrap_or_default(),
        }
    }
}
