//! Runtime environment classification.
//!
//! The rules are a pure function of process state sampled once at startup.
//! The platform layer reads the kernel version text and session variables
//! and feeds them in; nothing here touches the filesystem or environment.

use serde::{Deserialize, Serialize};

/// Clipboard runtime environment. Derived once per run and immutable for
/// the run's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    MacOs,
    Wsl2,
    Wayland,
    X11,
    Unknown,
}

/// Process state sampled by the platform layer.
#[derive(Debug, Clone)]
pub struct DetectionInput<'a> {
    /// OS identity in `std::env::consts::OS` spelling ("macos", "linux", ...).
    pub os: &'a str,
    /// Kernel version text (`/proc/version` on Linux). `None` when the
    /// source could not be read; a read failure must not abort detection.
    pub kernel_version: Option<&'a str>,
    /// Whether `WAYLAND_DISPLAY` is set.
    pub wayland_display: bool,
    /// Value of `XDG_SESSION_TYPE`, if set.
    pub session_type: Option<&'a str>,
}

impl Environment {
    /// Classify the runtime.
    ///
    /// Rules are ordered: macOS first, then on Linux the WSL kernel marker
    /// wins over any Wayland session variable, then Wayland, then X11 as
    /// the Linux fallback. Everything else is `Unknown`.
    pub fn classify(input: &DetectionInput<'_>) -> Self {
        match input.os {
            "macos" => Environment::MacOs,
            "linux" => {
                let wsl = input
                    .kernel_version
                    .map(|text| text.to_ascii_lowercase().contains("microsoft"))
                    .unwrap_or(false);

                if wsl {
                    Environment::Wsl2
                } else if input.wayland_display || input.session_type == Some("wayland") {
                    Environment::Wayland
                } else {
                    Environment::X11
                }
            }
            _ => Environment::Unknown,
        }
    }

    /// Whether this environment has a tool-backed acquisition strategy to
    /// try after the native grab. MacOs and Unknown rely on the native
    /// grab alone.
    pub fn has_secondary_strategy(&self) -> bool {
        matches!(
            self,
            Environment::Wsl2 | Environment::Wayland | Environment::X11
        )
    }

    /// The external tool this environment cannot operate without, if any.
    pub fn required_tool(&self) -> Option<&'static str> {
        match self {
            Environment::Wayland => Some("wl-paste"),
            Environment::X11 => Some("xclip"),
            Environment::Wsl2 => Some("powershell.exe"),
            Environment::MacOs | Environment::Unknown => None,
        }
    }
}
