//! Container runtime boundary
//!
//! The poller only needs one read-only query from the runtime: "list the
//! containers that are running right now". This module defines that seam as
//! a trait plus the plain records it returns, so the loop and the row
//! formatting never touch the client library directly.

pub mod docker;

use std::future::Future;

pub use docker::DockerSource;

/// A single port binding as reported by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortRecord {
    /// Bound host address; empty when the runtime did not report one
    pub ip: String,
    pub private_port: u16,
    /// Host-side port, 0 when the port is exposed but not published
    pub public_port: u16,
}

/// One running container as reported by the runtime, before any formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerRecord {
    pub id: String,
    pub image: String,
    /// Creation time in Unix seconds
    pub created: i64,
    pub ports: Vec<PortRecord>,
    pub status: String,
    pub names: Vec<String>,
}

/// Errors a listing query can produce.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The runtime could not be reached (socket, transport, timeout)
    #[error("container runtime unavailable: {0}")]
    Unavailable(String),

    /// The runtime answered, but refused the request
    #[error("container runtime rejected request (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("container runtime error: {0}")]
    Other(String),
}

impl SourceError {
    /// Whether the next cycle has a reasonable chance of succeeding.
    pub fn is_transient(&self) -> bool {
        matches!(self, SourceError::Unavailable(_))
    }
}

/// Something that can list the currently running containers.
pub trait ContainerSource {
    /// List running containers with default options, in runtime order.
    fn list_running(&self) -> impl Future<Output = Result<Vec<ContainerRecord>, SourceError>>;
}
