//! Wayland acquisition via `wl-paste` (wl-clipboard).

use cj_core::capture::{parse_targets, select_image_target};
use cj_core::{ClassifiedFailure, MimeTarget};

use super::{AcquisitionOutcome, ClipboardStrategy, FETCH_TIMEOUT, LIST_TIMEOUT};
use crate::tool::{self, ToolOutput};

const TOOL: &str = "wl-paste";

pub struct WaylandStrategy;

impl WaylandStrategy {
    fn list_targets(&self) -> Option<Vec<MimeTarget>> {
        let stdout = tool::run(TOOL, &["--list-types"], LIST_TIMEOUT).success_stdout()?;
        Some(parse_targets(&String::from_utf8_lossy(&stdout)))
    }
}

impl ClipboardStrategy for WaylandStrategy {
    fn acquire(&self) -> AcquisitionOutcome {
        let Some(targets) = self.list_targets() else {
            return AcquisitionOutcome::NoResult;
        };
        let Some(target) = select_image_target(&targets).cloned() else {
            log::debug!(
                "wl-paste listed {} targets, none of them images",
                targets.len()
            );
            return AcquisitionOutcome::NoResult;
        };

        let fetched = tool::run(
            TOOL,
            &["--no-newline", "--type", target.as_str()],
            FETCH_TIMEOUT,
        );
        let Some(bytes) = fetched.success_stdout() else {
            return AcquisitionOutcome::NoResult;
        };
        if bytes.is_empty() {
            return AcquisitionOutcome::NoResult;
        }

        match image::load_from_memory(&bytes) {
            Ok(img) => AcquisitionOutcome::Image(img),
            Err(err) => {
                log::debug!("decode of {} payload failed: {}", target, err);
                AcquisitionOutcome::NoResult
            }
        }
    }

    fn probe_emptiness(&self) -> ClassifiedFailure {
        if tool::resolve(TOOL).is_none() {
            return ClassifiedFailure::EmptyClipboard;
        }
        match tool::run(TOOL, &["--list-types"], LIST_TIMEOUT) {
            ToolOutput::Completed { code: 0, .. } => ClassifiedFailure::NoImageContent,
            _ => ClassifiedFailure::EmptyClipboard,
        }
    }
}
