//! Capture flow driver.
//!
//! Executes the pure state machine from `cj-core` against the strategy
//! table: each emitted action runs one side effect, whose outcome is fed
//! back in as the next event, until the flow resolves.

use cj_core::{
    CaptureAction, CaptureError, CaptureEvent, CaptureState, CaptureStateMachine, Environment,
    Resolution,
};
use image::DynamicImage;

use crate::clipboard::{self, AcquisitionOutcome};

/// Drive the acquisition fallback chain for `env` to its resolution.
///
/// Attempts run strictly in sequence; classification happens only after
/// every attempt has produced nothing.
pub fn run_capture(env: Environment) -> Result<DynamicImage, CaptureError> {
    let strategy = clipboard::strategy_for(env);

    let mut image = None;
    let (mut state, mut actions) =
        CaptureStateMachine::transition(env, CaptureState::Unattempted, CaptureEvent::Begin);

    while let Some(action) = actions.pop() {
        let event = match action {
            CaptureAction::AttemptNative => {
                let produced = match clipboard::acquire_native() {
                    AcquisitionOutcome::Image(img) => {
                        image = Some(img);
                        true
                    }
                    AcquisitionOutcome::NoResult => false,
                };
                CaptureEvent::NativeOutcome { produced }
            }
            CaptureAction::AttemptEnvStrategy => {
                let produced = match strategy.acquire() {
                    AcquisitionOutcome::Image(img) => {
                        image = Some(img);
                        true
                    }
                    AcquisitionOutcome::NoResult => false,
                };
                CaptureEvent::EnvOutcome { produced }
            }
            CaptureAction::ProbeEmptiness => CaptureEvent::Classified(strategy.probe_emptiness()),
        };

        (state, actions) = CaptureStateMachine::transition(env, state, event);
    }

    match state {
        CaptureState::Resolved(Resolution::Image) => image
            .ok_or_else(|| CaptureError::Other("capture flow resolved without an image".into())),
        CaptureState::Resolved(Resolution::Failure(failure)) => Err(failure.into()),
        _ => Err(CaptureError::Other("capture flow did not resolve".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::run_capture;
    use crate::test_support::{png_fixture, write_exe, ToolSandbox};
    use cj_core::{CaptureError, Environment};

    #[test]
    fn wayland_image_resolves_through_the_fallback_chain() {
        let dir = tempfile::tempdir().unwrap();
        let payload = dir.path().join("payload.png");
        std::fs::write(&payload, png_fixture(10, 10)).unwrap();
        write_exe(
            &dir.path().join("wl-paste"),
            &format!(
                "#!/bin/sh\nexport PATH=/usr/bin:/bin\nif [ \"$1\" = \"--list-types\" ]; then\n  echo image/png\n  exit 0\nfi\ncat {}\n",
                payload.display()
            ),
        );
        let _sandbox = ToolSandbox::new(dir.path());

        let img = run_capture(Environment::Wayland).unwrap();
        assert_eq!((img.width(), img.height()), (10, 10));
    }

    #[test]
    fn x11_failed_listing_classifies_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_exe(&dir.path().join("xclip"), "#!/bin/sh\nexit 1\n");
        let _sandbox = ToolSandbox::new(dir.path());

        assert!(matches!(
            run_capture(Environment::X11),
            Err(CaptureError::EmptyClipboard)
        ));
    }

    #[test]
    fn x11_listing_without_images_classifies_as_no_image_content() {
        let dir = tempfile::tempdir().unwrap();
        write_exe(
            &dir.path().join("xclip"),
            "#!/bin/sh\necho TARGETS\necho UTF8_STRING\nexit 0\n",
        );
        let _sandbox = ToolSandbox::new(dir.path());

        assert!(matches!(
            run_capture(Environment::X11),
            Err(CaptureError::NoImageContent)
        ));
    }

    #[test]
    fn x11_absent_tool_classifies_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let _sandbox = ToolSandbox::new(dir.path());

        assert!(matches!(
            run_capture(Environment::X11),
            Err(CaptureError::EmptyClipboard)
        ));
    }

    #[test]
    fn unknown_environment_classifies_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let _sandbox = ToolSandbox::new(dir.path());

        assert!(matches!(
            run_capture(Environment::Unknown),
            Err(CaptureError::EmptyClipboard)
        ));
    }
}
