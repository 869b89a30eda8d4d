//! macOS emptiness probe.
//!
//! Acquisition on macOS is covered entirely by the native grab; this
//! strategy only classifies why nothing was produced.

use cj_core::ClassifiedFailure;

use super::{AcquisitionOutcome, ClipboardStrategy, LIST_TIMEOUT};
use crate::tool::{self, ToolOutput};

const TEXT_TOOL: &str = "pbpaste";
const METADATA_TOOL: &str = "osascript";

pub struct MacOsStrategy;

impl ClipboardStrategy for MacOsStrategy {
    fn acquire(&self) -> AcquisitionOutcome {
        // The capture flow never schedules a secondary attempt on macOS.
        AcquisitionOutcome::NoResult
    }

    fn probe_emptiness(&self) -> ClassifiedFailure {
        if tool::resolve(TEXT_TOOL).is_none() {
            return ClassifiedFailure::EmptyClipboard;
        }

        if let ToolOutput::Completed { code: 0, stdout } = tool::run(TEXT_TOOL, &[], LIST_TIMEOUT) {
            if stdout.iter().any(|b| !b.is_ascii_whitespace()) {
                return ClassifiedFailure::NoImageContent;
            }
        }

        // A zero exit from the metadata query counts as "has other
        // content", without inspecting its output.
        match tool::run(METADATA_TOOL, &["-e", "clipboard info"], LIST_TIMEOUT) {
            ToolOutput::Completed { code: 0, .. } => ClassifiedFailure::NoImageContent,
            _ => ClassifiedFailure::EmptyClipboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MacOsStrategy;
    use crate::clipboard::ClipboardStrategy;
    use crate::test_support::{write_exe, ToolSandbox};
    use cj_core::ClassifiedFailure;

    #[test]
    fn absent_text_tool_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let _sandbox = ToolSandbox::new(dir.path());

        assert_eq!(
            MacOsStrategy.probe_emptiness(),
            ClassifiedFailure::EmptyClipboard
        );
    }

    #[test]
    fn nonempty_text_read_means_other_content() {
        let dir = tempfile::tempdir().unwrap();
        write_exe(&dir.path().join("pbpaste"), "#!/bin/sh\necho hello\n");
        let _sandbox = ToolSandbox::new(dir.path());

        assert_eq!(
            MacOsStrategy.probe_emptiness(),
            ClassifiedFailure::NoImageContent
        );
    }

    #[test]
    fn metadata_query_success_means_other_content() {
        let dir = tempfile::tempdir().unwrap();
        // Text read yields nothing, but the metadata query succeeds.
        write_exe(&dir.path().join("pbpaste"), "#!/bin/sh\nexit 0\n");
        write_exe(&dir.path().join("osascript"), "#!/bin/sh\nexit 0\n");
        let _sandbox = ToolSandbox::new(dir.path());

        assert_eq!(
            MacOsStrategy.probe_emptiness(),
            ClassifiedFailure::NoImageContent
        );
    }

    #[test]
    fn neither_signal_means_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_exe(&dir.path().join("pbpaste"), "#!/bin/sh\nexit 0\n");
        write_exe(&dir.path().join("osascript"), "#!/bin/sh\nexit 1\n");
        let _sandbox = ToolSandbox::new(dir.path());

        assert_eq!(
            MacOsStrategy.probe_emptiness(),
            ClassifiedFailure::EmptyClipboard
        );
    }
}
