//! # srviz Parser
//!
//! Indentation-aware parser and resolver for Nokia SR classic CLI
//! configuration dumps. This crate turns a flat configuration text into a
//! [`ResolvedDiagramInput`](srviz_core::record::ResolvedDiagramInput) for a
//! single interface.
//!
//! ## Pipeline
//!
//! 1. **Index** - Split the dump into lines annotated with indent width
//! 2. **Extract** - Find the interface block, preferring an address-bearing candidate
//! 3. **Attributes** - Read description, address, port binding and QoS policies
//! 4. **Ancestor** - Walk enclosing indent levels to the nearest service
//! 5. **Routes** - Correlate static routes with the interface subnet
//!
//! ## Usage
//!
//! ```
//! # use srviz_parser::{resolve, ResolveError, ResolveOptions};
//!
//! fn main() -> Result<(), ResolveError> {
//!     let source = r#"
//!         ies 10 customer 1 create
//!             interface "uplink" create
//!                 address 192.0.2.1/30
//!             exit
//!         exit
//!     "#;
//!
//!     let resolved = resolve(source, "uplink", &ResolveOptions::default())?;
//!     assert_eq!(resolved.peer().map(|p| p.address().to_string()), Some("192.0.2.2".into()));
//!     Ok(())
//! }
//! ```

pub mod ancestor;
pub mod attributes;
pub mod block;
pub mod routes;

mod document;
mod error;
mod resolve;
mod statement;

pub use document::{ConfigDocument, IndentedLine};
pub use error::ResolveError;
pub use resolve::{ResolveOptions, list_interfaces, resolve, resolve_document};
