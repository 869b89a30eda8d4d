//! X11 acquisition via `xclip`.

use cj_core::capture::{parse_targets, select_x11_target};
use cj_core::{ClassifiedFailure, MimeTarget};

use super::{AcquisitionOutcome, ClipboardStrategy, FETCH_TIMEOUT, LIST_TIMEOUT};
use crate::tool::{self, ToolOutput};

const TOOL: &str = "xclip";
const LIST_ARGS: [&str; 5] = ["-selection", "clipboard", "-t", "TARGETS", "-o"];

pub struct X11Strategy;

impl X11Strategy {
    fn list_targets(&self) -> Option<Vec<MimeTarget>> {
        let stdout = tool::run(TOOL, &LIST_ARGS, LIST_TIMEOUT).success_stdout()?;
        Some(parse_targets(&String::from_utf8_lossy(&stdout)))
    }
}

impl ClipboardStrategy for X11Strategy {
    fn acquire(&self) -> AcquisitionOutcome {
        let Some(targets) = self.list_targets() else {
            return AcquisitionOutcome::NoResult;
        };
        // First match in the tool's reported order wins, whether it is an
        // image MIME type or a legacy bitmap token.
        let Some(target) = select_x11_target(&targets).cloned() else {
            log::debug!(
                "xclip listed {} targets, none of them images",
                targets.len()
            );
            return AcquisitionOutcome::NoResult;
        };

        let fetched = tool::run(
            TOOL,
            &["-selection", "clipboard", "-t", target.as_str(), "-o"],
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
        match tool::run(TOOL, &LIST_ARGS, LIST_TIMEOUT) {
            ToolOutput::Completed { code: 0, .. } => ClassifiedFailure::NoImageContent,
            _ => ClassifiedFailure::EmptyClipboard,
        }
    }
}
