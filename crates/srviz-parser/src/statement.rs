//! Line-level grammar for the keyword statements srviz understands.
//!
//! Each public function takes a single trimmed line and returns the parsed
//! value, or `None` when the line is some other statement. Nothing here ever
//! fails a document: unknown or malformed lines are simply not matched.

use std::net::Ipv4Addr;

use winnow::{
    Parser,
    ascii::{dec_uint, space1},
    combinator::{alt, delimited, opt, preceded, separated_pair},
    error::{ContextError, ErrMode},
    token::{literal, take_till, take_while},
};

use srviz_core::{prefix::Ipv4Prefix, record::RouteEntry, service::ServiceKind};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Runs `parser` against the start of `line`, ignoring any trailing text.
fn parse_line<'src, O>(
    line: &'src str,
    mut parser: impl Parser<Input<'src>, O, ErrMode<ContextError>>,
) -> Option<O> {
    let mut input = line;
    parser.parse_next(&mut input).ok()
}

/// A keyword followed by at least one space.
fn keyword<'src>(word: &'static str) -> impl Parser<Input<'src>, (), ErrMode<ContextError>> {
    (literal(word), space1).void()
}

/// A run of non-whitespace characters.
fn token<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., |c: char| !c.is_whitespace()).parse_next(input)
}

/// A `"quoted"` or bare name.
fn name<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt((
        delimited('"', take_till(0.., '"'), '"'),
        take_while(1.., |c: char| !c.is_whitespace() && c != '"'),
    ))
    .parse_next(input)
}

/// Free text after a keyword: `"quoted text"` or bare text to end of line.
fn free_text<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt((
        delimited('"', take_till(0.., '"'), opt('"')),
        take_till(1.., '"'),
    ))
    .map(str::trim)
    .verify(|text: &str| !text.is_empty())
    .parse_next(input)
}

fn ipv4(input: &mut Input<'_>) -> IResult<Ipv4Addr> {
    token
        .verify_map(|text: &str| text.parse().ok())
        .parse_next(input)
}

fn prefix(input: &mut Input<'_>) -> IResult<Ipv4Prefix> {
    token
        .verify_map(|text: &str| text.parse().ok())
        .parse_next(input)
}

fn service_kind(input: &mut Input<'_>) -> IResult<ServiceKind> {
    take_while(1.., |c: char| c.is_ascii_alphabetic())
        .verify_map(ServiceKind::from_keyword)
        .parse_next(input)
}

fn port_id<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., |c: char| c.is_ascii_digit() || c == '/').parse_next(input)
}

/// Parses `interface "name" ...` or `interface name ...`, returning the name.
pub fn interface_name(line: &str) -> Option<&str> {
    parse_line(line, preceded(keyword("interface"), name))
}

/// Parses a service header such as `vprn 100 customer 1 create`.
///
/// The keyword is matched case-insensitively against [`ServiceKind`].
pub fn service_header(line: &str) -> Option<(ServiceKind, u32)> {
    parse_line(line, separated_pair(service_kind, space1, dec_uint))
}

/// Parses `description "text"` or `description text`.
///
/// Returns `None` for an empty description.
pub fn description(line: &str) -> Option<&str> {
    parse_line(line, preceded(keyword("description"), free_text))
}

/// Returns `true` if the line is an `address ...` statement, valid or not.
pub fn is_address(line: &str) -> bool {
    parse_line(line, keyword("address")).is_some()
}

/// Parses `address A.B.C.D/N`.
pub fn address(line: &str) -> Option<Ipv4Prefix> {
    parse_line(line, preceded(keyword("address"), prefix))
}

/// Returns `true` if the line opens a SAP (`sap <id> ...`).
pub fn is_sap(line: &str) -> bool {
    parse_line(line, keyword("sap")).is_some()
}

/// Parses the port identifier bound by a `sap` or `port` statement.
///
/// Only the slash-delimited part is kept, so `sap 1/1/1:100 create` yields
/// `1/1/1`. Non-physical bindings such as `sap lag-1:10` yield `None`.
pub fn port_binding(line: &str) -> Option<&str> {
    parse_line(
        line,
        preceded(alt((keyword("sap"), keyword("port"))), port_id),
    )
}

/// Parses a `port <id>` header, returning the full identifier token.
pub fn port_header(line: &str) -> Option<&str> {
    parse_line(line, preceded(keyword("port"), token))
}

/// Parses `qos <id>`.
pub fn qos_policy(line: &str) -> Option<u32> {
    parse_line(line, preceded(keyword("qos"), dec_uint))
}

/// Parses `static-route <prefix> next-hop <address> ...`.
pub fn static_route(line: &str) -> Option<RouteEntry> {
    parse_line(
        line,
        separated_pair(
            preceded(keyword("static-route"), prefix),
            (space1, keyword("next-hop")),
            ipv4,
        )
        .map(|(destination, next_hop)| RouteEntry::new(destination, next_hop)),
    )
}

/// Parses `name "hostname"` as found inside the `system` block.
pub fn system_name(line: &str) -> Option<&str> {
    parse_line(line, preceded(keyword("name"), free_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_name_quoted_and_bare() {
        assert_eq!(interface_name("interface \"to-peer\" create"), Some("to-peer"));
        assert_eq!(interface_name("interface \"with space\""), Some("with space"));
        assert_eq!(interface_name("interface system"), Some("system"));
        assert_eq!(interface_name("interface-group \"x\""), None);
        assert_eq!(interface_name("description \"interface x\""), None);
    }

    #[test]
    fn test_service_header() {
        assert_eq!(
            service_header("vprn 100 customer 1 create"),
            Some((ServiceKind::Vprn, 100))
        );
        assert_eq!(service_header("IES 5 name \"x\""), Some((ServiceKind::Ies, 5)));
        assert_eq!(service_header("epipe 7"), Some((ServiceKind::Epipe, 7)));
        assert_eq!(service_header("vprn customer"), None);
        assert_eq!(service_header("router 100"), None);
    }

    #[test]
    fn test_description() {
        assert_eq!(description("description \"Customer A\""), Some("Customer A"));
        assert_eq!(description("description Uplink to core"), Some("Uplink to core"));
        assert_eq!(description("description \"unterminated"), Some("unterminated"));
        assert_eq!(description("description \"\""), None);
        assert_eq!(description("descriptions \"x\""), None);
    }

    #[test]
    fn test_address() {
        let prefix = address("address 10.1.1.1/30").unwrap();
        assert_eq!(prefix.to_string(), "10.1.1.1/30");
        assert!(is_address("address 10.1.1.1/30"));
        assert!(is_address("address bogus"));
        assert_eq!(address("address bogus"), None);
        assert_eq!(address("address 10.1.1.1"), None);
        assert!(!is_address("ipv6"));
    }

    #[test]
    fn test_port_binding() {
        assert_eq!(port_binding("sap 1/1/1 create"), Some("1/1/1"));
        assert_eq!(port_binding("sap 1/2/3:100 create"), Some("1/2/3"));
        assert_eq!(port_binding("port 2/1/4"), Some("2/1/4"));
        assert_eq!(port_binding("sap lag-1:10 create"), None);
        assert!(is_sap("sap lag-1:10 create"));
        assert!(!is_sap("sap-ingress 10 create"));
    }

    #[test]
    fn test_port_header() {
        assert_eq!(port_header("port 1/1/1"), Some("1/1/1"));
        assert_eq!(port_header("port 1/1/10 create"), Some("1/1/10"));
        assert_eq!(port_header("port-policy"), None);
    }

    #[test]
    fn test_qos_policy() {
        assert_eq!(qos_policy("qos 10"), Some(10));
        assert_eq!(qos_policy("qos 20 shared-queuing"), Some(20));
        assert_eq!(qos_policy("qos default"), None);
    }

    #[test]
    fn test_static_route() {
        let route = static_route("static-route 192.168.50.0/24 next-hop 10.1.1.2").unwrap();
        assert_eq!(route.destination().to_string(), "192.168.50.0/24");
        assert_eq!(route.next_hop(), Ipv4Addr::new(10, 1, 1, 2));

        let with_tail = static_route("static-route 0.0.0.0/0 next-hop 10.0.0.1 preference 10");
        assert!(with_tail.is_some());

        assert_eq!(static_route("static-route 10.0.0.0/8 black-hole"), None);
        assert_eq!(static_route("static-route-entry 10.0.0.0/8"), None);
    }

    #[test]
    fn test_system_name() {
        assert_eq!(system_name("name \"PE-SEOUL-01\""), Some("PE-SEOUL-01"));
        assert_eq!(system_name("name core1"), Some("core1"));
        assert_eq!(system_name("named \"x\""), None);
    }
}
