//! CLI logic for the srviz tool.
//!
//! Loads a configuration dump, resolves one interface and writes its Mermaid
//! diagram, or lists the interfaces the dump declares.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use srviz::{DiagramBuilder, SrvizError, record::InterfaceSummary};

/// Run the srviz CLI application, writing to stdout.
///
/// # Errors
///
/// Returns `SrvizError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - An interface that is not declared in the dump
pub fn run(args: &Args) -> Result<(), SrvizError> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Run the srviz CLI application, writing stdout-bound output to `out`.
///
/// When `--output` is given the diagram goes to that file instead and
/// nothing is written to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output(args: &Args, out: &mut impl Write) -> Result<(), SrvizError> {
    info!(input_path = args.file; "Processing configuration");

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.file)?;
    let builder = DiagramBuilder::new(app_config);

    if args.list {
        let interfaces = builder.list_interfaces(&source);
        info!(interfaces = interfaces.len(); "Listing interfaces");
        write_listing(out, &interfaces)?;
        return Ok(());
    }

    let interface = args.interface.as_deref().ok_or_else(|| {
        SrvizError::InvalidArguments("an interface name is required unless listing".to_string())
    })?;

    let resolved = builder.resolve(&source, interface)?;
    let diagram = builder.render_mermaid(&resolved);

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{diagram}\n"))?;
            info!(output_file = path; "Diagram written");
        }
        None if args.raw => writeln!(out, "{diagram}")?,
        None => writeln!(out, "```mermaid\n{diagram}\n```")?,
    }

    Ok(())
}

/// Writes one line per interface: name, address and enclosing service.
fn write_listing(out: &mut impl Write, interfaces: &[InterfaceSummary]) -> io::Result<()> {
    for summary in interfaces {
        let address = summary
            .address()
            .map_or_else(|| "-".to_string(), |prefix| prefix.to_string());
        let service = summary
            .service()
            .map_or_else(|| "-".to_string(), ToString::to_string);

        writeln!(out, "{:<24} {:<18} {service}", summary.name(), address)?;
    }
    Ok(())
}
