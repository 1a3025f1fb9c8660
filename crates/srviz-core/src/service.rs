//! Service kinds and resolved service bindings.
//!
//! An interface in an SR configuration normally lives inside a service
//! block such as `vprn 100 customer 1 create`. The service keyword is drawn
//! from a small fixed vocabulary represented by [`ServiceKind`].

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Error returned when a keyword is not a known service kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service kind `{0}`")]
pub struct UnknownServiceKind(pub String);

/// The service container types an interface can be bound to.
///
/// Keywords are matched case-insensitively, so `vprn`, `VPRN` and `Vprn`
/// all map to [`ServiceKind::Vprn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ServiceKind {
    /// Internet Enhanced Service.
    Ies,
    /// Virtual Private LAN Service.
    Vpls,
    /// Virtual Private Routed Network.
    Vprn,
    /// Point-to-point Ethernet pseudowire.
    Epipe,
}

impl ServiceKind {
    /// Every service kind, in the order they are usually listed.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Ies,
        ServiceKind::Vpls,
        ServiceKind::Vprn,
        ServiceKind::Epipe,
    ];

    /// Returns the configuration keyword (lowercase) for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            ServiceKind::Ies => "ies",
            ServiceKind::Vpls => "vpls",
            ServiceKind::Vprn => "vprn",
            ServiceKind::Epipe => "epipe",
        }
    }

    /// Looks up a kind by keyword, ignoring ASCII case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceKind::Ies => "IES",
            ServiceKind::Vpls => "VPLS",
            ServiceKind::Vprn => "VPRN",
            ServiceKind::Epipe => "EPIPE",
        };
        f.write_str(label)
    }
}

impl FromStr for ServiceKind {
    type Err = UnknownServiceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| UnknownServiceKind(s.to_string()))
    }
}

impl TryFrom<String> for ServiceKind {
    type Error = UnknownServiceKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The service that encloses an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBinding {
    kind: ServiceKind,
    id: u32,
    description: Option<String>,
}

impl ServiceBinding {
    /// Creates a new service binding.
    pub fn new(kind: ServiceKind, id: u32, description: Option<String>) -> Self {
        Self {
            kind,
            id,
            description,
        }
    }

    /// Returns the service kind.
    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    /// Returns the numeric service identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the service description, if the service block declares one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for ServiceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}
