//! Per-environment clipboard acquisition strategies.
//!
//! One strategy per environment behind a uniform capability: attempt an
//! image grab, and classify emptiness once every attempt has failed.
//! Strategies absorb all internal faults and degrade to `NoResult` so the
//! fallback chain always completes.

mod macos;
mod native;
mod wayland;
mod wsl;
mod x11;

pub use native::acquire_native;

use std::time::Duration;

use cj_core::{ClassifiedFailure, Environment};
use image::DynamicImage;

/// Deadline for metadata/listing calls.
pub(crate) const LIST_TIMEOUT: Duration = Duration::from_secs(2);

/// Deadline for payload-fetch calls.
pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of one acquisition attempt. Strategies carry no failure detail;
/// classification happens once, after the whole chain is exhausted.
pub enum AcquisitionOutcome {
    Image(DynamicImage),
    NoResult,
}

/// Uniform capability implemented by every environment strategy.
pub trait ClipboardStrategy {
    /// Try to pull an image off the clipboard. Any internal fault (tool
    /// missing, nonzero exit, timeout, decode error) degrades to
    /// `NoResult`.
    fn acquire(&self) -> AcquisitionOutcome;

    /// Distinguish "clipboard has nothing" from "clipboard has non-image
    /// content". Only invoked after every acquisition attempt returned
    /// `NoResult`.
    fn probe_emptiness(&self) -> ClassifiedFailure;
}

/// Strategy table keyed by environment.
pub fn strategy_for(env: Environment) -> Box<dyn ClipboardStrategy> {
    match env {
        Environment::Wayland => Box::new(wayland::WaylandStrategy),
        Environment::X11 => Box::new(x11::X11Strategy),
        Environment::Wsl2 => Box::new(wsl::Wsl2Strategy),
        Environment::MacOs => Box::new(macos::MacOsStrategy),
        Environment::Unknown => Box::new(UnknownStrategy),
    }
}

/// No tool exists to interrogate an unrecognized environment; the flow
/// never schedules a secondary attempt and the probe defaults to empty.
struct UnknownStrategy;

impl ClipboardStrategy for UnknownStrategy {
    fn acquire(&self) -> AcquisitionOutcome {
        AcquisitionOutcome::NoResult
    }

    fn probe_emptiness(&self) -> ClassifiedFailure {
        ClassifiedFailure::EmptyClipboard
    }
}
