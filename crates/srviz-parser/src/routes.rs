//! Static route correlation.
//!
//! Static routes are declared flat in the routing context, independent of
//! any interface. A route belongs to an interface when its next hop lies in
//! the interface subnet; that next hop is then the directly connected peer.

use std::net::Ipv4Addr;

use log::debug;

use srviz_core::{
    prefix::Ipv4Prefix,
    record::{Peer, PeerSource, RouteEntry},
};

use crate::{document::ConfigDocument, statement};

/// The outcome of correlating static routes with one interface subnet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteCorrelation {
    /// The inferred peer, if any.
    pub peer: Option<Peer>,
    /// Routes whose next hop is the peer side of the subnet, in document order.
    pub routes: Vec<RouteEntry>,
}

/// Collects every `static-route ... next-hop ...` statement in the document.
///
/// Nesting is ignored. Statements that do not parse are skipped.
pub fn static_routes(doc: &ConfigDocument<'_>) -> Vec<RouteEntry> {
    doc.lines()
        .iter()
        .filter_map(|line| statement::static_route(line.trimmed()))
        .collect()
}

/// Correlates the document's static routes with `subnet`.
///
/// A route qualifies when its next hop is inside `subnet` and is not
/// `local_address`. The last qualifying next hop becomes the peer. When no
/// route qualifies and `subnet` is a /30, the other host of the pair is
/// assumed to be the peer.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use srviz_parser::{ConfigDocument, routes::correlate_routes};
///
/// let doc = ConfigDocument::new("static-route 192.168.50.0/24 next-hop 10.0.0.2");
/// let subnet = "10.0.0.1/30".parse().unwrap();
/// let correlation = correlate_routes(&doc, subnet, Ipv4Addr::new(10, 0, 0, 1));
///
/// assert_eq!(correlation.peer.map(|p| p.address()), Some(Ipv4Addr::new(10, 0, 0, 2)));
/// assert_eq!(correlation.routes.len(), 1);
/// ```
pub fn correlate_routes(
    doc: &ConfigDocument<'_>,
    subnet: Ipv4Prefix,
    local_address: Ipv4Addr,
) -> RouteCorrelation {
    let routes: Vec<RouteEntry> = static_routes(doc)
        .into_iter()
        .filter(|route| subnet.contains(route.next_hop()) && route.next_hop() != local_address)
        .collect();

    if let Some(last) = routes.last().map(RouteEntry::next_hop) {
        if routes.iter().any(|route| route.next_hop() != last) {
            debug!(peer:% = last; "Several next hops in subnet, keeping the last");
        }
        return RouteCorrelation {
            peer: Some(Peer::new(last, PeerSource::StaticRoute)),
            routes,
        };
    }

    let peer = subnet.point_to_point_hosts().and_then(|hosts| {
        hosts
            .into_iter()
            .find(|host| *host != local_address)
            .map(|host| Peer::new(host, PeerSource::PointToPoint))
    });

    RouteCorrelation {
        peer,
        routes: Vec::new(),
    }
}
