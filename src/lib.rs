//! dockwatch - live table of running Docker containers
//!
//! Polls the container runtime once per second and redraws a table of the
//! running containers on standard output.

pub mod config;
pub mod poller;
pub mod runtime;
pub mod table;
