//! Mermaid flowchart exporter.
//!
//! The diagram is a two-subgraph flowchart: the local router on one side
//! holding the interface node, and the remote side holding the next hop and
//! the customer networks reached through it.
//!
//! ```text
//! graph LR
//!     subgraph Host ["PE-01"]
//!         A["Port / Interface / IP / Service"]
//!     end
//!     subgraph Remote ["port description"]
//!         B["Next-Hop"]
//!         C["Customer Network"]
//!     end
//!     A -->|"In-QoS / Out-QoS"| B
//!     B -.-> C
//! ```

use log::debug;

use srviz_core::record::{InterfaceRecord, ResolvedDiagramInput};

use super::Exporter;
use crate::config::StyleConfig;

const NOT_AVAILABLE: &str = "N/A";
const UNKNOWN: &str = "Unknown";
const DEFAULT_QOS: &str = "Default";
const DEFAULT_REMOTE_TITLE: &str = "Remote Connected Device";

/// Renders resolved interfaces as Mermaid `graph` flowcharts.
#[derive(Debug)]
pub struct MermaidExporter<'a> {
    style: &'a StyleConfig,
}

impl<'a> MermaidExporter<'a> {
    /// Creates an exporter using the given style.
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    fn host_label(&self, interface: &InterfaceRecord) -> String {
        let port = interface.port();
        let port_id = port.map_or(NOT_AVAILABLE.to_string(), |port| {
            sanitize_label(port.id())
        });
        let ip = interface
            .address()
            .map_or_else(|| format!("{NOT_AVAILABLE}/0"), |prefix| prefix.to_string());
        let service = interface
            .service()
            .map_or(UNKNOWN.to_string(), ToString::to_string);

        format!(
            "<div style='text-align: left'>\
             <b>Port:</b> {port_id} {}<br/><br/>\
             <b>Interface:</b> {} {}<br/><br/>\
             <b>IP:</b> {ip}<br/><br/>\
             <b>Service:</b> {service} {}\
             </div>",
            parenthesized(port.and_then(|port| port.description())),
            sanitize_label(interface.name()),
            parenthesized(interface.description()),
            parenthesized(interface.service().and_then(|service| service.description())),
        )
    }
}

impl Exporter for MermaidExporter<'_> {
    fn export(&self, input: &ResolvedDiagramInput) -> String {
        let interface = input.interface();
        let qos = interface.qos();

        let hostname = sanitize_label(input.hostname().unwrap_or(self.style.default_hostname()));
        let remote_title = interface
            .port()
            .and_then(|port| port.description())
            .map_or(DEFAULT_REMOTE_TITLE.to_string(), sanitize_label);
        let peer = input
            .peer()
            .map_or(UNKNOWN.to_string(), |peer| peer.address().to_string());
        let ingress = qos.ingress().map_or(DEFAULT_QOS.to_string(), |id| id.to_string());
        let egress = qos.egress().map_or(DEFAULT_QOS.to_string(), |id| id.to_string());

        let mut network_label = "<b>Customer Network</b>".to_string();
        for route in input.routes() {
            network_label.push_str("<br/>");
            network_label.push_str(&route.destination().to_string());
        }

        debug!(
            interface = interface.name(),
            routes = input.routes().len();
            "Rendering Mermaid diagram"
        );

        [
            format!("graph {}", self.style.direction()),
            format!("    subgraph Host [\"{hostname}\"]"),
            format!("        A[\"{}\"]", self.host_label(interface)),
            "    end".to_string(),
            format!("    subgraph Remote [\"{remote_title}\"]"),
            format!("        B[\"<b>Next-Hop</b><br/>{peer}\"]"),
            format!("        C[\"{network_label}\"]"),
            "    end".to_string(),
            format!("    A -->|\"In-QoS: {ingress}<br/>Out-QoS: {egress}\"| B"),
            "    B -.-> C".to_string(),
            format!(
                "    style A fill:{},stroke:#333,stroke-width:2px,color:#000,text-align:left",
                self.style.host_fill()
            ),
            format!(
                "    style B fill:{},stroke:#0066cc,stroke-width:2px,color:#000",
                self.style.peer_fill()
            ),
            format!(
                "    style C fill:{},stroke:#333,stroke-width:2px,stroke-dasharray: 5 5",
                self.style.network_fill()
            ),
        ]
        .join("\n")
    }
}

/// Makes free text safe inside a double-quoted Mermaid label.
///
/// `&` becomes ` and `, double quotes become single quotes, angle brackets
/// are HTML-escaped and whitespace runs collapse to a single space.
pub fn sanitize_label(text: &str) -> String {
    let escaped = text
        .replace('&', " and ")
        .replace('"', "'")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    escaped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `<br/>(text)` for a present, non-blank description, otherwise nothing.
fn parenthesized(description: Option<&str>) -> String {
    match description.map(sanitize_label) {
        Some(text) if !text.is_empty() => format!("<br/>({text})"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use srviz_core::{
        record::{Peer, PeerSource, PortBinding, QosPolicies, RouteEntry},
        service::{ServiceBinding, ServiceKind},
    };

    use super::*;
    use crate::config::Direction;

    fn to_peer() -> ResolvedDiagramInput {
        let interface = InterfaceRecord::new(
            "to-peer",
            Some("10.1.1.1/30".parse().unwrap()),
            None,
            Some(PortBinding::new("1/1/1", None)),
            QosPolicies::new(Some(10), None),
            Some(ServiceBinding::new(
                ServiceKind::Vprn,
                100,
                Some("Customer A".to_string()),
            )),
        );
        ResolvedDiagramInput::new(
            None,
            interface,
            Some(Peer::new(Ipv4Addr::new(10, 1, 1, 2), PeerSource::StaticRoute)),
            vec![RouteEntry::new(
                "192.168.50.0/24".parse().unwrap(),
                Ipv4Addr::new(10, 1, 1, 2),
            )],
        )
    }

    #[test]
    fn test_render_full_diagram() {
        let style = StyleConfig::default();
        let output = MermaidExporter::new(&style).export(&to_peer());

        let expected = [
            "graph LR",
            "    subgraph Host [\"Nokia_SR\"]",
            "        A[\"<div style='text-align: left'><b>Port:</b> 1/1/1 <br/><br/><b>Interface:</b> to-peer <br/><br/><b>IP:</b> 10.1.1.1/30<br/><br/><b>Service:</b> VPRN 100 <br/>(Customer A)</div>\"]",
            "    end",
            "    subgraph Remote [\"Remote Connected Device\"]",
            "        B[\"<b>Next-Hop</b><br/>10.1.1.2\"]",
            "        C[\"<b>Customer Network</b><br/>192.168.50.0/24\"]",
            "    end",
            "    A -->|\"In-QoS: 10<br/>Out-QoS: Default\"| B",
            "    B -.-> C",
            "    style A fill:#ffffff,stroke:#333,stroke-width:2px,color:#000,text-align:left",
            "    style B fill:#e6f3ff,stroke:#0066cc,stroke-width:2px,color:#000",
            "    style C fill:#ffffff,stroke:#333,stroke-width:2px,stroke-dasharray: 5 5",
        ]
        .join("\n");

        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_defaults_for_bare_interface() {
        let interface = InterfaceRecord::new(
            "loopback",
            None,
            None,
            None,
            QosPolicies::default(),
            None,
        );
        let input = ResolvedDiagramInput::new(None, interface, None, Vec::new());
        let style = StyleConfig::default();
        let output = MermaidExporter::new(&style).export(&input);

        assert!(output.contains("<b>Port:</b> N/A "));
        assert!(output.contains("<b>IP:</b> N/A/0"));
        assert!(output.contains("<b>Service:</b> Unknown </div>"));
        assert!(output.contains("B[\"<b>Next-Hop</b><br/>Unknown\"]"));
        assert!(output.contains("C[\"<b>Customer Network</b>\"]"));
        assert!(output.contains("In-QoS: Default<br/>Out-QoS: Default"));
    }

    #[test]
    fn test_render_uses_hostname_port_description_and_style() {
        let interface = InterfaceRecord::new(
            "uplink",
            Some("192.0.2.1/30".parse().unwrap()),
            Some("Core \"A\" & B".to_string()),
            Some(PortBinding::new("2/1/1", Some("To <CE-1>".to_string()))),
            QosPolicies::new(None, Some(20)),
            None,
        );
        let input =
            ResolvedDiagramInput::new(Some("PE-01".to_string()), interface, None, Vec::new());
        let style = StyleConfig::default().with_direction(Direction::TopToBottom);
        let output = MermaidExporter::new(&style).export(&input);

        assert!(output.starts_with("graph TB\n"));
        assert!(output.contains("subgraph Host [\"PE-01\"]"));
        assert!(output.contains("subgraph Remote [\"To &lt;CE-1&gt;\"]"));
        assert!(output.contains("<b>Port:</b> 2/1/1 <br/>(To &lt;CE-1&gt;)"));
        assert!(output.contains("<b>Interface:</b> uplink <br/>(Core 'A' and B)"));
        assert!(output.contains("In-QoS: Default<br/>Out-QoS: 20"));
    }

    #[test]
    fn test_sanitize_label() {
        assert_eq!(sanitize_label("A&B"), "A and B");
        assert_eq!(sanitize_label("say \"hi\""), "say 'hi'");
        assert_eq!(sanitize_label("<b>"), "&lt;b&gt;");
        assert_eq!(sanitize_label("  many\t spaces\n here "), "many spaces here");
        assert_eq!(sanitize_label(""), "");
    }
}
