//! Configuration types for srviz resolution and rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field is optional in the file; missing fields take the
//! defaults shown below.
//!
//! ```toml
//! [resolve]
//! service_kinds = ["ies", "vpls", "vprn", "epipe"]
//! description_window = 30
//!
//! [style]
//! direction = "LR"
//! default_hostname = "Nokia_SR"
//! host_fill = "#ffffff"
//! peer_fill = "#e6f3ff"
//! network_fill = "#ffffff"
//! ```
//!
//! # Example
//!
//! ```
//! # use srviz::config::{AppConfig, Direction};
//! let config = AppConfig::default();
//! assert_eq!(config.style().direction(), Direction::LeftToRight);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;

use serde::Deserialize;

use srviz_core::service::ServiceKind;
use srviz_parser::{ResolveOptions, ancestor::DEFAULT_DESCRIPTION_WINDOW};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Resolution section.
    #[serde(default)]
    resolve: ResolveConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`].
    ///
    /// # Arguments
    ///
    /// * `resolve` - Interface resolution settings.
    /// * `style` - Diagram styling options.
    pub fn new(resolve: ResolveConfig, style: StyleConfig) -> Self {
        Self { resolve, style }
    }

    /// Returns the resolution configuration.
    pub fn resolve(&self) -> &ResolveConfig {
        &self.resolve
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending setting.
    pub fn validate(&self) -> Result<(), String> {
        self.resolve.validate()?;
        self.style.validate()
    }
}

/// Settings that control how an interface is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Service kinds accepted as an interface's enclosing service.
    service_kinds: Vec<ServiceKind>,

    /// Lines scanned after a service header for its description.
    description_window: usize,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            service_kinds: ServiceKind::ALL.to_vec(),
            description_window: DEFAULT_DESCRIPTION_WINDOW,
        }
    }
}

impl ResolveConfig {
    /// Creates a new [`ResolveConfig`].
    pub fn new(service_kinds: Vec<ServiceKind>, description_window: usize) -> Self {
        Self {
            service_kinds,
            description_window,
        }
    }

    /// Returns the accepted service kinds.
    pub fn service_kinds(&self) -> &[ServiceKind] {
        &self.service_kinds
    }

    /// Returns the service description window.
    pub fn description_window(&self) -> usize {
        self.description_window
    }

    /// Builds the parser options for this configuration.
    pub fn options(&self) -> ResolveOptions {
        ResolveOptions::new(self.service_kinds.clone(), self.description_window)
    }

    fn validate(&self) -> Result<(), String> {
        if self.service_kinds.is_empty() {
            return Err("resolve.service_kinds must name at least one service kind".to_string());
        }
        Ok(())
    }
}

/// Flow direction of the rendered flowchart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "LR", alias = "lr")]
    LeftToRight,
    #[serde(rename = "RL", alias = "rl")]
    RightToLeft,
    #[serde(rename = "TB", alias = "tb")]
    TopToBottom,
    #[serde(rename = "BT", alias = "bt")]
    BottomToTop,
}

impl Direction {
    /// Returns the Mermaid keyword for this direction.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::LeftToRight => "LR",
            Self::RightToLeft => "RL",
            Self::TopToBottom => "TB",
            Self::BottomToTop => "BT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Flowchart direction.
    direction: Direction,

    /// Host subgraph title used when the dump has no `system name`.
    default_hostname: String,

    /// Fill color of the local interface node.
    host_fill: String,

    /// Fill color of the next-hop node.
    peer_fill: String,

    /// Fill color of the customer network node.
    network_fill: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            default_hostname: "Nokia_SR".to_string(),
            host_fill: "#ffffff".to_string(),
            peer_fill: "#e6f3ff".to_string(),
            network_fill: "#ffffff".to_string(),
        }
    }
}

impl StyleConfig {
    /// Returns the flowchart direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the fallback host name.
    pub fn default_hostname(&self) -> &str {
        &self.default_hostname
    }

    /// Returns the local interface node fill.
    pub fn host_fill(&self) -> &str {
        &self.host_fill
    }

    /// Returns the next-hop node fill.
    pub fn peer_fill(&self) -> &str {
        &self.peer_fill
    }

    /// Returns the customer network node fill.
    pub fn network_fill(&self) -> &str {
        &self.network_fill
    }

    /// Returns a copy with the given direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    fn validate(&self) -> Result<(), String> {
        for (key, value) in [
            ("host_fill", &self.host_fill),
            ("peer_fill", &self.peer_fill),
            ("network_fill", &self.network_fill),
        ] {
            if !is_hex_color(value) {
                return Err(format!(
                    "style.{key} must be a #rgb or #rrggbb color, got `{value}`"
                ));
            }
        }
        Ok(())
    }
}

/// Fill values are pasted into Mermaid `style` lines, so only plain hex
/// colors are accepted.
fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.resolve().service_kinds(), ServiceKind::ALL);
        assert_eq!(config.resolve().description_window(), 30);
        assert_eq!(config.style().default_hostname(), "Nokia_SR");
        assert_eq!(config.style().peer_fill(), "#e6f3ff");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [resolve]
            service_kinds = ["VPRN", "ies"]

            [style]
            direction = "TB"
            peer_fill = "#abc"
            "##,
        )
        .unwrap();

        assert_eq!(
            config.resolve().service_kinds(),
            [ServiceKind::Vprn, ServiceKind::Ies]
        );
        assert_eq!(config.resolve().description_window(), 30);
        assert_eq!(config.style().direction(), Direction::TopToBottom);
        assert_eq!(config.style().peer_fill(), "#abc");
        assert_eq!(config.style().host_fill(), "#ffffff");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_service_kind_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [resolve]
            service_kinds = ["l2vpn"]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_vocabulary() {
        let config = AppConfig::new(ResolveConfig::new(Vec::new(), 30), StyleConfig::default());
        let message = config.validate().unwrap_err();
        assert!(message.contains("service_kinds"));
    }

    #[test]
    fn test_validate_rejects_non_hex_fill() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            network_fill = "red;stroke:#000"
            "#,
        )
        .unwrap();

        let message = config.validate().unwrap_err();
        assert!(message.contains("style.network_fill"));
    }

    #[test]
    fn test_options_carry_vocabulary() {
        let config = ResolveConfig::new(vec![ServiceKind::Epipe], 5);
        let options = config.options();

        assert_eq!(options.service_kinds(), [ServiceKind::Epipe]);
        assert_eq!(options.description_window(), 5);
    }
}
