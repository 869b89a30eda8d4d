//! WSL2 acquisition: proxy through the Windows host with PowerShell.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use cj_core::ClassifiedFailure;

use super::{AcquisitionOutcome, ClipboardStrategy, FETCH_TIMEOUT};
use crate::tool::{self, ToolOutput};

const TOOL: &str = "powershell.exe";

/// Host-side script: read the clipboard image, PNG-encode it in memory,
/// and print it base64 so the bytes survive the interop text channel.
const GRAB_SCRIPT: &str = "Add-Type -AssemblyName System.Windows.Forms; \
$img = [System.Windows.Forms.Clipboard]::GetImage(); \
if ($img -eq $null) { exit 1 }; \
$ms = New-Object System.IO.MemoryStream; \
$img.Save($ms, [System.Drawing.Imaging.ImageFormat]::Png); \
[Convert]::ToBase64String($ms.ToArray())";

/// Host-side probe: succeeds when the host clipboard has any readable
/// content at all.
const PROBE_SCRIPT: &str = "Get-Clipboard";

pub struct Wsl2Strategy;

impl ClipboardStrategy for Wsl2Strategy {
    fn acquire(&self) -> AcquisitionOutcome {
        let output = tool::run(
            TOOL,
            &["-NoProfile", "-NonInteractive", "-Command", GRAB_SCRIPT],
            FETCH_TIMEOUT,
        );
        let Some(stdout) = output.success_stdout() else {
            return AcquisitionOutcome::NoResult;
        };

        // PowerShell pads its output with CRLFs; strip all whitespace
        // before decoding.
        let text: String = String::from_utf8_lossy(&stdout)
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if text.is_empty() {
            return AcquisitionOutcome::NoResult;
        }

        let png = match BASE64.decode(text.as_bytes()) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::debug!("host clipboard payload is not valid base64: {}", err);
                return AcquisitionOutcome::NoResult;
            }
        };

        match image::load_from_memory(&png) {
            Ok(img) => AcquisitionOutcome::Image(img),
            Err(err) => {
                log::debug!("decode of host clipboard PNG failed: {}", err);
                AcquisitionOutcome::NoResult
            }
        }
    }

    fn probe_emptiness(&self) -> ClassifiedFailure {
        if tool::resolve(TOOL).is_none() {
            return ClassifiedFailure::EmptyClipboard;
        }
        match tool::run(
            TOOL,
            &["-NoProfile", "-NonInteractive", "-Command", PROBE_SCRIPT],
            FETCH_TIMEOUT,
        ) {
            ToolOutput::Completed { code: 0, .. } => ClassifiedFailure::NoImageContent,
            _ => ClassifiedFailure::EmptyClipboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    use super::Wsl2Strategy;
    use crate::clipboard::{AcquisitionOutcome, ClipboardStrategy};
    use crate::test_support::{png_fixture, write_exe, ToolSandbox};
    use cj_core::ClassifiedFailure;

    #[test]
    fn absent_interpreter_yields_no_result() {
        let dir = tempfile::tempdir().unwrap();
        let _sandbox = ToolSandbox::new(dir.path());

        assert!(matches!(
            Wsl2Strategy.acquire(),
            AcquisitionOutcome::NoResult
        ));
    }

    #[test]
    fn base64_png_from_host_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let encoded = BASE64.encode(png_fixture(12, 5));
        // Real interop output ends with CRLF; reproduce that.
        write_exe(
            &dir.path().join("powershell.exe"),
            &format!("#!/bin/sh\nprintf '{encoded}\\r\\n'\nexit 0\n"),
        );
        let _sandbox = ToolSandbox::new(dir.path());

        match Wsl2Strategy.acquire() {
            AcquisitionOutcome::Image(img) => {
                assert_eq!((img.width(), img.height()), (12, 5));
            }
            AcquisitionOutcome::NoResult => panic!("expected an image"),
        }
    }

    #[test]
    fn host_without_image_exits_nonzero_and_yields_no_result() {
        let dir = tempfile::tempdir().unwrap();
        write_exe(&dir.path().join("powershell.exe"), "#!/bin/sh\nexit 1\n");
        let _sandbox = ToolSandbox::new(dir.path());

        assert!(matches!(
            Wsl2Strategy.acquire(),
            AcquisitionOutcome::NoResult
        ));
    }

    #[test]
    fn garbage_stdout_yields_no_result() {
        let dir = tempfile::tempdir().unwrap();
        write_exe(
            &dir.path().join("powershell.exe"),
            "#!/bin/sh\necho 'not base64 at all!'\nexit 0\n",
        );
        let _sandbox = ToolSandbox::new(dir.path());

        assert!(matches!(
            Wsl2Strategy.acquire(),
            AcquisitionOutcome::NoResult
        ));
    }

    #[test]
    fn probe_maps_host_read_to_classification() {
        let dir = tempfile::tempdir().unwrap();
        write_exe(&dir.path().join("powershell.exe"), "#!/bin/sh\nexit 1\n");
        let _sandbox = ToolSandbox::new(dir.path());
        assert_eq!(
            Wsl2Strategy.probe_emptiness(),
            ClassifiedFailure::EmptyClipboard
        );

        write_exe(
            &dir.path().join("powershell.exe"),
            "#!/bin/sh\necho 'some text'\nexit 0\n",
        );
        assert_eq!(
            Wsl2Strategy.probe_emptiness(),
            ClassifiedFailure::NoImageContent
        );
    }
}
