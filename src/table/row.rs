use chrono::DateTime;

use crate::runtime::{ContainerRecord, PortRecord};

/// Number of ID characters shown, same as `docker ps`
pub const SHORT_ID_LEN: usize = 12;

/// Bind address whose port mapping is displayed
pub const WILDCARD_V6: &str = "::";

/// Port cell when no `::` binding exists. Fixed text, not the template applied to zeros.
pub const UNMAPPED_PORT: &str = "->0";

/// Names cell when the runtime reports no names
pub const NO_NAME: &str = "-";

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Coarse status classification, decided by the core and colored by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Up,
    Down,
}

impl StatusClass {
    /// Anything mentioning "Up" counts as up ("Up 5 minutes", "Up 2 hours (healthy)").
    pub fn classify(status: &str) -> Self {
        if status.contains("Up") {
            StatusClass::Up
        } else {
            StatusClass::Down
        }
    }
}

/// One display row, rebuilt from scratch every cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRow {
    pub id: String,
    pub image: String,
    pub port: String,
    pub created: String,
    pub status: String,
    pub status_class: StatusClass,
    pub name: String,
}

impl ContainerRow {
    pub fn from_record(record: &ContainerRecord) -> Self {
        Self {
            id: short_id(&record.id),
            image: record.image.clone(),
            port: format_port(select_port(&record.ports)),
            created: format_created(record.created),
            status: record.status.clone(),
            status_class: StatusClass::classify(&record.status),
            name: record
                .names
                .first()
                .cloned()
                .unwrap_or_else(|| NO_NAME.to_string()),
        }
    }
}

/// First 12 characters of the ID, or the whole ID if it is shorter.
pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

/// Pick the first binding on `::`. IPv4-only containers get no mapping.
pub fn select_port(ports: &[PortRecord]) -> Option<&PortRecord> {
    ports.iter().find(|p| p.ip == WILDCARD_V6)
}

pub fn format_port(port: Option<&PortRecord>) -> String {
    match port {
        Some(p) => format!("{}{}->{}", p.ip, p.private_port, p.public_port),
        None => UNMAPPED_PORT.to_string(),
    }
}

/// Unix seconds to `YYYY-MM-DD HH:MM:SS` in UTC. Out-of-range values are shown raw.
pub fn format_created(created: i64) -> String {
    match DateTime::from_timestamp(created, 0) {
        Some(ts) => ts.format(CREATED_FORMAT).to_string(),
        None => created.to_string(),
    }
}
