//! Enclosing service lookup.
//!
//! The resolver walks backward from a block header, one enclosing indent
//! level at a time, until it meets a service header (`vprn 100 ...`). The
//! nearest service wins even when services are nested inside other services.

use log::{debug, trace};

use srviz_core::service::{ServiceBinding, ServiceKind};

use crate::{document::ConfigDocument, statement};

/// Default number of lines scanned after a service header for its description.
pub const DEFAULT_DESCRIPTION_WINDOW: usize = 30;

/// Finds the nearest enclosing service of the line at `target_line_index`.
///
/// Only non-transparent, non-`exit` lines indented strictly less than the
/// current threshold are considered. Each enclosing line that is not a
/// service lowers the threshold to its own indent, so siblings of an
/// enclosing block are never mistaken for ancestors.
///
/// Once a service header matching `vocabulary` is found, up to
/// `description_window` following lines are searched for its description,
/// stopping at the first line indented at or below the service header.
///
/// # Arguments
///
/// * `doc` - The indexed configuration document.
/// * `target_line_index` - Line index of the block whose service is wanted.
/// * `target_indent` - Indent width of that line.
/// * `vocabulary` - Service kinds accepted as containers.
/// * `description_window` - Maximum lines scanned for the service description.
pub fn resolve_ancestor(
    doc: &ConfigDocument<'_>,
    target_line_index: usize,
    target_indent: usize,
    vocabulary: &[ServiceKind],
    description_window: usize,
) -> Option<ServiceBinding> {
    let mut threshold = target_indent;

    for index in (0..target_line_index.min(doc.len())).rev() {
        let line = &doc.lines()[index];
        if threshold == 0 {
            break;
        }
        if line.is_transparent() || line.is_exit() || line.indent() >= threshold {
            continue;
        }

        match statement::service_header(line.trimmed()) {
            Some((kind, id)) if vocabulary.contains(&kind) => {
                let description = service_description(doc, index, description_window);
                debug!(kind:% = kind, id = id, line = index; "Resolved enclosing service");
                return Some(ServiceBinding::new(kind, id, description));
            }
            _ => {
                trace!(line = index, indent = line.indent(); "Passing enclosing block");
                threshold = line.indent();
            }
        }
    }

    None
}

/// Finds the description of the service whose header is at `header_index`.
fn service_description(
    doc: &ConfigDocument<'_>,
    header_index: usize,
    window: usize,
) -> Option<String> {
    let header_indent = doc.line(header_index)?.indent();

    doc.lines()
        .iter()
        .skip(header_index + 1)
        .take(window)
        .filter(|line| !line.is_transparent())
        .take_while(|line| line.indent() > header_indent)
        .find_map(|line| statement::description(line.trimmed()))
        .map(str::to_string)
}
