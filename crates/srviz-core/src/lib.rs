//! srviz Core Types
//!
//! This crate provides the data model shared by the srviz parser, renderer
//! and CLI. It includes:
//!
//! - **Prefixes**: IPv4 address plus prefix length with subnet arithmetic ([`prefix::Ipv4Prefix`])
//! - **Services**: Service kinds and the resolved service binding of an interface ([`service`] module)
//! - **Records**: The resolved interface record and route correlation results ([`record`] module)
//!
//! Every type here is a read-only projection of a configuration document.
//! Absent attributes stay `None`; display defaults are a rendering concern.

pub mod prefix;
pub mod record;
pub mod service;
