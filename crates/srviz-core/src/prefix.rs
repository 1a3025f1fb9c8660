//! IPv4 prefixes as they appear in `address` and `static-route` statements.

use std::{fmt, net::Ipv4Addr, str::FromStr};

use thiserror::Error;

/// Errors produced when parsing an [`Ipv4Prefix`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixParseError {
    #[error("missing `/` between address and prefix length")]
    MissingSlash,

    #[error("invalid IPv4 address: {0}")]
    Address(String),

    #[error("invalid prefix length: {0}")]
    Length(String),
}

/// An IPv4 address with a prefix length, e.g. `10.1.1.1/30`.
///
/// The address keeps its host bits: for an interface address the prefix
/// records both the local address and the subnet it lives in. Use
/// [`Ipv4Prefix::network`] to get the masked network address.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use srviz_core::prefix::Ipv4Prefix;
///
/// let prefix: Ipv4Prefix = "10.0.0.5/30".parse().unwrap();
/// assert_eq!(prefix.network(), Ipv4Addr::new(10, 0, 0, 4));
/// assert!(prefix.contains(Ipv4Addr::new(10, 0, 0, 6)));
/// assert!(!prefix.contains(Ipv4Addr::new(10, 0, 0, 8)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Prefix {
    addr: Ipv4Addr,
    len: u8,
}

impl Ipv4Prefix {
    /// Creates a prefix, returning `None` when `len` exceeds 32.
    pub fn new(addr: Ipv4Addr, len: u8) -> Option<Self> {
        (len <= 32).then_some(Self { addr, len })
    }

    /// Returns the address as written, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Returns the prefix length.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Returns the subnet mask for this prefix length.
    pub fn mask(&self) -> u32 {
        match self.len {
            0 => 0,
            len => u32::MAX << (32 - u32::from(len)),
        }
    }

    /// Returns the network address (host bits cleared).
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask())
    }

    /// Returns `true` if `addr` lies inside this prefix's subnet.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & self.mask() == u32::from(self.network())
    }

    /// Returns the two usable host addresses of a /30 point-to-point subnet.
    ///
    /// Returns `None` for every other prefix length.
    pub fn point_to_point_hosts(&self) -> Option<[Ipv4Addr; 2]> {
        if self.len != 30 {
            return None;
        }
        let network = u32::from(self.network());
        Some([Ipv4Addr::from(network + 1), Ipv4Addr::from(network + 2)])
    }
}

impl fmt::Display for Ipv4Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl FromStr for Ipv4Prefix {
    type Err = PrefixParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, len) = s.split_once('/').ok_or(PrefixParseError::MissingSlash)?;
        let addr = addr
            .parse::<Ipv4Addr>()
            .map_err(|_| PrefixParseError::Address(addr.to_string()))?;
        let len = len
            .parse::<u8>()
            .ok()
            .filter(|len| *len <= 32)
            .ok_or_else(|| PrefixParseError::Length(len.to_string()))?;
        Ok(Self { addr, len })
    }
}
