//! Resolved interface records and route correlation results.
//!
//! These types are the handoff between resolution and rendering:
//!
//! ```text
//! Configuration dump
//!     ↓ line index + block extraction
//! Interface block
//!     ↓ attribute extraction + ancestor lookup + route correlation
//! ResolvedDiagramInput (these types)
//!     ↓ export
//! Mermaid flowchart
//! ```
//!
//! Nothing here applies display defaults. A missing description is `None`,
//! not an empty string, so callers can tell "absent" from "empty".

use std::net::Ipv4Addr;

use crate::{prefix::Ipv4Prefix, service::ServiceBinding};

/// The physical port an interface is bound to through its SAP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortBinding {
    id: String,
    description: Option<String>,
}

impl PortBinding {
    /// Creates a new port binding.
    pub fn new(id: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: id.into(),
            description,
        }
    }

    /// Returns the slash-delimited port identifier, e.g. `1/1/1`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the description of the matching `port` block, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// QoS policy identifiers applied to a SAP, per traffic direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QosPolicies {
    ingress: Option<u32>,
    egress: Option<u32>,
}

impl QosPolicies {
    /// Creates a new pair of policy identifiers.
    pub fn new(ingress: Option<u32>, egress: Option<u32>) -> Self {
        Self { ingress, egress }
    }

    /// Returns the ingress policy id.
    pub fn ingress(&self) -> Option<u32> {
        self.ingress
    }

    /// Returns the egress policy id.
    pub fn egress(&self) -> Option<u32> {
        self.egress
    }
}

/// Everything resolved about a single named interface.
///
/// Built once per resolution request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    name: String,
    address: Option<Ipv4Prefix>,
    description: Option<String>,
    port: Option<PortBinding>,
    qos: QosPolicies,
    service: Option<ServiceBinding>,
}

impl InterfaceRecord {
    /// Creates a new interface record.
    pub fn new(
        name: impl Into<String>,
        address: Option<Ipv4Prefix>,
        description: Option<String>,
        port: Option<PortBinding>,
        qos: QosPolicies,
        service: Option<ServiceBinding>,
    ) -> Self {
        Self {
            name: name.into(),
            address,
            description,
            port,
            qos,
            service,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the interface address with its prefix length.
    pub fn address(&self) -> Option<Ipv4Prefix> {
        self.address
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn port(&self) -> Option<&PortBinding> {
        self.port.as_ref()
    }

    pub fn qos(&self) -> QosPolicies {
        self.qos
    }

    /// Returns the nearest enclosing service, if the interface has one.
    pub fn service(&self) -> Option<&ServiceBinding> {
        self.service.as_ref()
    }
}

/// A `static-route <destination> next-hop <address>` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteEntry {
    destination: Ipv4Prefix,
    next_hop: Ipv4Addr,
}

impl RouteEntry {
    pub fn new(destination: Ipv4Prefix, next_hop: Ipv4Addr) -> Self {
        Self {
            destination,
            next_hop,
        }
    }

    pub fn destination(&self) -> Ipv4Prefix {
        self.destination
    }

    pub fn next_hop(&self) -> Ipv4Addr {
        self.next_hop
    }
}

/// How a peer address was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerSource {
    /// A static route's next hop fell inside the interface subnet.
    StaticRoute,
    /// No route matched; the other host of a /30 subnet was assumed.
    PointToPoint,
}

/// The remote neighbour reached through an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peer {
    address: Ipv4Addr,
    source: PeerSource,
}

impl Peer {
    pub fn new(address: Ipv4Addr, source: PeerSource) -> Self {
        Self { address, source }
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn source(&self) -> PeerSource {
        self.source
    }
}

/// The complete input for rendering one interface diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDiagramInput {
    hostname: Option<String>,
    interface: InterfaceRecord,
    peer: Option<Peer>,
    routes: Vec<RouteEntry>,
}

impl ResolvedDiagramInput {
    /// Creates a new resolved diagram input.
    ///
    /// # Arguments
    ///
    /// * `hostname` - The router's `system name`, if declared.
    /// * `interface` - The resolved interface record.
    /// * `peer` - The resolved peer, if one could be determined.
    /// * `routes` - Static routes whose next hop is reachable through the interface.
    pub fn new(
        hostname: Option<String>,
        interface: InterfaceRecord,
        peer: Option<Peer>,
        routes: Vec<RouteEntry>,
    ) -> Self {
        Self {
            hostname,
            interface,
            peer,
            routes,
        }
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn interface(&self) -> &InterfaceRecord {
        &self.interface
    }

    pub fn peer(&self) -> Option<Peer> {
        self.peer
    }

    /// Returns the related static routes in document order.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }
}

/// A short listing entry for an interface declared in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSummary {
    name: String,
    address: Option<Ipv4Prefix>,
    service: Option<ServiceBinding>,
}

impl InterfaceSummary {
    pub fn new(
        name: impl Into<String>,
        address: Option<Ipv4Prefix>,
        service: Option<ServiceBinding>,
    ) -> Self {
        Self {
            name: name.into(),
            address,
            service,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<Ipv4Prefix> {
        self.address
    }

    pub fn service(&self) -> Option<&ServiceBinding> {
        self.service.as_ref()
    }
}
