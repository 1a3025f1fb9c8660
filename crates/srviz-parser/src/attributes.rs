//! Typed attribute extraction from blocks.
//!
//! Extractors return the first matching statement inside a block, or `None`.
//! Display defaults such as `"Default"` or `"N/A"` are applied by the
//! renderer, never here.

use srviz_core::{prefix::Ipv4Prefix, record::QosPolicies};

use crate::{
    block::{Block, block_at},
    document::ConfigDocument,
    statement,
};

/// Returns the first `description` inside the block body.
pub fn description<'src>(doc: &ConfigDocument<'src>, block: &Block) -> Option<&'src str> {
    block
        .body(doc)
        .iter()
        .find_map(|line| statement::description(line.trimmed()))
}

/// Returns the first valid `address A.B.C.D/N` inside the block body.
pub fn address(doc: &ConfigDocument<'_>, block: &Block) -> Option<Ipv4Prefix> {
    block
        .body(doc)
        .iter()
        .find_map(|line| statement::address(line.trimmed()))
}

/// Returns the physical port bound by the first `sap` or `port` statement.
pub fn port_id<'src>(doc: &ConfigDocument<'src>, block: &Block) -> Option<&'src str> {
    block
        .body(doc)
        .iter()
        .find_map(|line| statement::port_binding(line.trimmed()))
}

/// Extracts ingress and egress QoS policy ids from the block's first SAP.
///
/// Each direction is read only from its own `ingress` / `egress` sub-block,
/// bounded by that sub-block's `exit`, so an egress policy is never reported
/// as ingress or the other way around.
pub fn qos_policies(doc: &ConfigDocument<'_>, block: &Block) -> QosPolicies {
    let Some(sap) = block
        .indexed_body(doc)
        .find(|(_, line)| statement::is_sap(line.trimmed()))
        .and_then(|(index, _)| block_at(doc, index))
    else {
        return QosPolicies::default();
    };

    QosPolicies::new(
        direction_policy(doc, &sap, "ingress"),
        direction_policy(doc, &sap, "egress"),
    )
}

/// Finds `qos <id>` inside the `direction` sub-block of a SAP.
fn direction_policy(doc: &ConfigDocument<'_>, sap: &Block, direction: &str) -> Option<u32> {
    let (index, _) = sap
        .indexed_body(doc)
        .find(|(_, line)| line.trimmed() == direction)?;
    let scope = block_at(doc, index)?;

    scope
        .body(doc)
        .iter()
        .find_map(|line| statement::qos_policy(line.trimmed()))
}

/// Looks up the description of the `port <id>` definition for `port_id`.
///
/// Port identifiers must match exactly, so `1/1/1` never matches `1/1/10`.
/// When the identifier appears in several `port` statements, the least
/// indented one is taken as the port definition.
pub fn port_description<'src>(doc: &ConfigDocument<'src>, port_id: &str) -> Option<&'src str> {
    let (index, _) = doc
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| statement::port_header(line.trimmed()) == Some(port_id))
        .min_by_key(|(index, line)| (line.indent(), *index))?;
    let port = block_at(doc, index)?;

    description(doc, &port)
}

/// Returns the router hostname from `system` / `name "..."`.
pub fn hostname<'src>(doc: &ConfigDocument<'src>) -> Option<&'src str> {
    let (index, _) = doc
        .lines()
        .iter()
        .enumerate()
        .find(|(_, line)| line.trimmed() == "system")?;
    let system = block_at(doc, index)?;

    system
        .body(doc)
        .iter()
        .find_map(|line| statement::system_name(line.trimmed()))
}
