//! Interface resolution: the composition of block extraction, attribute
//! extraction, ancestor lookup and route correlation.

use indexmap::IndexMap;
use log::{debug, info, trace};

use srviz_core::{
    record::{InterfaceRecord, InterfaceSummary, PortBinding, ResolvedDiagramInput},
    service::{ServiceBinding, ServiceKind},
};

use crate::{
    ancestor::{self, DEFAULT_DESCRIPTION_WINDOW},
    attributes,
    block::{self, Block},
    document::ConfigDocument,
    error::ResolveError,
    routes::{self, RouteCorrelation},
    statement,
};

/// Options controlling how interfaces are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    service_kinds: Vec<ServiceKind>,
    description_window: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            service_kinds: ServiceKind::ALL.to_vec(),
            description_window: DEFAULT_DESCRIPTION_WINDOW,
        }
    }
}

impl ResolveOptions {
    /// Creates new resolve options.
    ///
    /// # Arguments
    ///
    /// * `service_kinds` - Service kinds accepted as an interface's container.
    /// * `description_window` - Lines scanned after a service header for its description.
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
}

/// Resolves `target_interface` in a configuration dump.
///
/// # Errors
///
/// Returns [`ResolveError::InterfaceNotFound`] if no `interface` header with
/// that exact name exists. Every other gap in the configuration resolves to
/// an absent value on the returned record.
///
/// # Examples
///
/// ```
/// use srviz_parser::{ResolveOptions, resolve};
///
/// let source = r#"
///     vprn 100 customer 1 create
///         interface "to-peer" create
///             address 10.1.1.1/30
///         exit
///     exit
/// "#;
///
/// let resolved = resolve(source, "to-peer", &ResolveOptions::default()).unwrap();
/// assert_eq!(resolved.interface().service().map(|s| s.id()), Some(100));
/// ```
pub fn resolve(
    source: &str,
    target_interface: &str,
    options: &ResolveOptions,
) -> Result<ResolvedDiagramInput, ResolveError> {
    let doc = ConfigDocument::new(source);
    resolve_document(&doc, target_interface, options)
}

/// Resolves `target_interface` in an already indexed document.
///
/// Use this to resolve several interfaces against one [`ConfigDocument`]
/// without re-indexing it.
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_document(
    doc: &ConfigDocument<'_>,
    target_interface: &str,
    options: &ResolveOptions,
) -> Result<ResolvedDiagramInput, ResolveError> {
    info!(interface = target_interface; "Resolving interface");

    let block = block::extract_block(doc, |line| {
        statement::interface_name(line.trimmed()) == Some(target_interface)
    })
    .ok_or_else(|| ResolveError::InterfaceNotFound {
        name: target_interface.to_string(),
    })?;
    debug!(
        start = block.start(),
        end = block.end(),
        closed_by:? = block.closed_by();
        "Selected interface block"
    );

    let address = attributes::address(doc, &block);
    let port = attributes::port_id(doc, &block).map(|id| {
        PortBinding::new(
            id,
            attributes::port_description(doc, id).map(str::to_string),
        )
    });
    let service = service_of(doc, &block, options);

    let interface = InterfaceRecord::new(
        target_interface,
        address,
        attributes::description(doc, &block).map(str::to_string),
        port,
        attributes::qos_policies(doc, &block),
        service,
    );

    let RouteCorrelation { peer, routes } = address
        .map(|prefix| routes::correlate_routes(doc, prefix, prefix.addr()))
        .unwrap_or_default();
    debug!(peer:? = peer, routes = routes.len(); "Correlated static routes");

    let resolved = ResolvedDiagramInput::new(
        attributes::hostname(doc).map(str::to_string),
        interface,
        peer,
        routes,
    );
    trace!(resolved:? = resolved; "Resolved interface");

    Ok(resolved)
}

/// Lists every interface declared in a configuration dump.
///
/// Names appear once, in order of first declaration. When a name is declared
/// more than once, the same candidate [`resolve`] would pick is summarised.
pub fn list_interfaces(source: &str, options: &ResolveOptions) -> Vec<InterfaceSummary> {
    let doc = ConfigDocument::new(source);

    let mut declared: IndexMap<&str, Vec<Block>> = IndexMap::new();
    for (index, line) in doc.lines().iter().enumerate() {
        let Some(name) = statement::interface_name(line.trimmed()) else {
            continue;
        };
        if let Some(block) = block::block_at(&doc, index) {
            declared.entry(name).or_default().push(block);
        }
    }
    info!(interfaces = declared.len(); "Listed interfaces");

    declared
        .into_iter()
        .filter_map(|(name, candidates)| {
            let block = block::select_candidate(&doc, &candidates)?;
            Some(InterfaceSummary::new(
                name,
                attributes::address(&doc, &block),
                service_of(&doc, &block, options),
            ))
        })
        .collect()
}

fn service_of(
    doc: &ConfigDocument<'_>,
    block: &Block,
    options: &ResolveOptions,
) -> Option<ServiceBinding> {
    ancestor::resolve_ancestor(
        doc,
        block.start(),
        block.indent(),
        options.service_kinds(),
        options.description_window(),
    )
}
