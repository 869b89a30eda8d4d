//! Runtime environment probing.

use cj_core::{DetectionInput, Environment};

const PROC_VERSION: &str = "/proc/version";

/// Detect the runtime environment. Called once at startup; the result is
/// immutable for the rest of the run.
pub fn detect() -> Environment {
    // A read failure here just means "not WSL2"; detection continues.
    let kernel_version = std::fs::read_to_string(PROC_VERSION).ok();
    let session_type = std::env::var("XDG_SESSION_TYPE").ok();

    let env = Environment::classify(&DetectionInput {
        os: std::env::consts::OS,
        kernel_version: kernel_version.as_deref(),
        wayland_display: std::env::var_os("WAYLAND_DISPLAY").is_some(),
        session_type: session_type.as_deref(),
    });

    log::debug!("detected environment: {:?}", env);
    env
}
