//! # clipjpg
//!
//! Save the current clipboard image to a JPEG file.
//!
//! The binary front end over the capture pipeline: argument parsing,
//! eager dependency checks, output naming, and exact error reporting.

pub mod cli;
pub mod output;

use std::path::PathBuf;

use cj_core::{CaptureError, Environment};
use cj_platform::{capture, normalize, tool};

/// Run the full pipeline for an already-detected environment: eager
/// dependency check, acquisition fallback chain, normalization, file
/// write. Returns the path of the written JPEG.
pub fn execute(cli: &cli::Cli, env: Environment) -> Result<PathBuf, CaptureError> {
    ensure_required_tool(env)?;

    let image = capture::run_capture(env)?;

    let path = PathBuf::from(output::resolve_output_path(cli.output.as_deref()));
    normalize::save_jpeg(&image, &path)?;

    log::info!("saved clipboard image to {}", path.display());
    Ok(path)
}

/// The environment's required external tool must resolve before any
/// acquisition is attempted.
fn ensure_required_tool(env: Environment) -> Result<(), CaptureError> {
    match env.required_tool() {
        Some(name) if tool::resolve(name).is_none() => Err(CaptureError::MissingDependency {
            tool: name.to_string(),
        }),
        _ => Ok(()),
    }
}
