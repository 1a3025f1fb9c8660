//! Diagram exporters.
//!
//! An exporter turns a [`ResolvedDiagramInput`] into diagram markup. Display
//! defaults for absent attributes are applied here and nowhere else.

pub mod mermaid;

use srviz_core::record::ResolvedDiagramInput;

/// A diagram output format.
pub trait Exporter {
    /// Renders the resolved interface as diagram markup.
    fn export(&self, input: &ResolvedDiagramInput) -> String;
}
