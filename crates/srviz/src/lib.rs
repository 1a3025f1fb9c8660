//! srviz - Resolve Nokia SR interfaces into Mermaid relationship diagrams.
//!
//! Resolution of a single interface out of a classic CLI configuration dump
//! (its port, service, QoS policies and static-route peer), and rendering of
//! the result as a Mermaid flowchart.

pub mod config;

mod error;
mod export;

pub use srviz_core::{prefix, record, service};

pub use error::SrvizError;
pub use export::mermaid::sanitize_label;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, mermaid::MermaidExporter};
use srviz_core::record::{InterfaceSummary, ResolvedDiagramInput};

/// Builder for resolving interfaces and rendering their diagrams.
///
/// # Examples
///
/// ```rust
/// use srviz::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     vprn 100 customer 1 create
///         interface "to-peer" create
///             address 10.1.1.1/30
///         exit
///     exit
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Resolve the interface
/// let resolved = builder.resolve(source, "to-peer")
///     .expect("Failed to resolve");
///
/// // Render it as Mermaid
/// let mermaid = builder.render_mermaid(&resolved);
/// assert!(mermaid.starts_with("graph LR"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including resolve and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve `interface` in a configuration dump.
    ///
    /// # Arguments
    ///
    /// * `source` - Configuration dump text
    /// * `interface` - Exact interface name, without quotes
    ///
    /// # Errors
    ///
    /// Returns [`SrvizError::Resolve`] when no interface with that name is
    /// declared.
    pub fn resolve(
        &self,
        source: &str,
        interface: &str,
    ) -> Result<ResolvedDiagramInput, SrvizError> {
        let options = self.config.resolve().options();
        let resolved = srviz_parser::resolve(source, interface, &options)?;

        debug!(interface = interface; "Interface resolved successfully");
        trace!(resolved:?; "Resolved interface");

        Ok(resolved)
    }

    /// List every interface declared in a configuration dump.
    pub fn list_interfaces(&self, source: &str) -> Vec<InterfaceSummary> {
        let options = self.config.resolve().options();
        srviz_parser::list_interfaces(source, &options)
    }

    /// Render a resolved interface as a Mermaid flowchart.
    ///
    /// The returned text has no surrounding code fence.
    pub fn render_mermaid(&self, input: &ResolvedDiagramInput) -> String {
        info!(interface = input.interface().name(); "Rendering Mermaid diagram");
        MermaidExporter::new(self.config.style()).export(input)
    }
}
