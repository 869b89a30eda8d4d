//! Capture domain: clipboard targets and terminal classification.

mod state_machine;

pub use state_machine::{CaptureAction, CaptureEvent, CaptureState, CaptureStateMachine, Resolution};

use std::fmt;

use serde::{Deserialize, Serialize};

const IMAGE_PREFIX: &str = "image/";

/// Legacy X11 bitmap tokens some clipboard owners advertise instead of a
/// MIME identifier.
const LEGACY_BITMAP_TOKENS: [&str; 2] = ["PIXMAP", "BITMAP"];

/// One clipboard representation token as reported by a listing tool
/// (e.g. `image/png`, `UTF8_STRING`, `PIXMAP`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeTarget(pub String);

impl MimeTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_image(&self) -> bool {
        self.0.starts_with(IMAGE_PREFIX)
    }

    pub fn is_legacy_bitmap(&self) -> bool {
        LEGACY_BITMAP_TOKENS.contains(&self.0.as_str())
    }
}

impl fmt::Display for MimeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MimeTarget {
    fn from(s: &str) -> Self {
        MimeTarget(s.to_string())
    }
}

/// Parse line-oriented listing output into targets, preserving the tool's
/// reported order. Blank lines and surrounding whitespace are dropped.
pub fn parse_targets(stdout: &str) -> Vec<MimeTarget> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(MimeTarget::from)
        .collect()
}

/// First target the Wayland flow accepts: an `image/*` entry, in the
/// tool's reported order.
pub fn select_image_target(targets: &[MimeTarget]) -> Option<&MimeTarget> {
    targets.iter().find(|t| t.is_image())
}

/// First target the X11 flow accepts: an `image/*` entry or a legacy
/// bitmap token. The listing order decides which kind wins; there is
/// deliberately no priority between the two.
pub fn select_x11_target(targets: &[MimeTarget]) -> Option<&MimeTarget> {
    targets.iter().find(|t| t.is_image() || t.is_legacy_bitmap())
}

/// Terminal classification, computed only after every acquisition
/// strategy has produced no image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifiedFailure {
    /// No retrievable clipboard data of any kind.
    EmptyClipboard,
    /// The clipboard holds data, but none of it is an image.
    NoImageContent,
}
