//! Capture flow state machine.
//!
//! Defines a pure state transition function for the acquisition fallback
//! chain. Side effects (tool invocation, clipboard access) are executed by
//! the platform driver, which feeds each outcome back in as an event.

use serde::{Deserialize, Serialize};

use super::ClassifiedFailure;
use crate::environment::Environment;

/// Capture flow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureState {
    /// Nothing attempted yet.
    Unattempted,
    /// The native grab ran and produced no image.
    NativeTried,
    /// The environment-specific strategy ran and produced no image.
    EnvSpecificTried,
    /// Terminal. The flow never retries or loops.
    Resolved(Resolution),
}

/// Terminal resolution of a capture run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// An acquisition strategy produced an image.
    Image,
    /// Every strategy came up empty; the probe classified why.
    Failure(ClassifiedFailure),
}

/// Events that drive the capture flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureEvent {
    /// Start the flow.
    Begin,
    /// The native grab finished.
    NativeOutcome { produced: bool },
    /// The environment-specific strategy finished.
    EnvOutcome { produced: bool },
    /// The emptiness probe classified the failure.
    Classified(ClassifiedFailure),
}

/// Side-effects requested by state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureAction {
    /// Run the native clipboard grab.
    AttemptNative,
    /// Run the strategy matching the detected environment.
    AttemptEnvStrategy,
    /// Run the emptiness probe for the detected environment.
    ProbeEmptiness,
}

/// Pure capture state machine. The environment is fixed for the run and
/// only decides whether a secondary strategy exists.
pub struct CaptureStateMachine;

impl CaptureStateMachine {
    pub fn transition(
        env: Environment,
        state: CaptureState,
        event: CaptureEvent,
    ) -> (CaptureState, Vec<CaptureAction>) {
        match (state, event) {
            (CaptureState::Unattempted, CaptureEvent::Begin) => (
                CaptureState::Unattempted,
                vec![CaptureAction::AttemptNative],
            ),
            (CaptureState::Unattempted, CaptureEvent::NativeOutcome { produced: true }) => {
                (CaptureState::Resolved(Resolution::Image), Vec::new())
            }
            (CaptureState::Unattempted, CaptureEvent::NativeOutcome { produced: false }) => {
                // MacOs and Unknown have no tool-backed strategy; they go
                // straight to classification.
                let next = if env.has_secondary_strategy() {
                    vec![CaptureAction::AttemptEnvStrategy]
                } else {
                    vec![CaptureAction::ProbeEmptiness]
                };
                (CaptureState::NativeTried, next)
            }
            (CaptureState::NativeTried, CaptureEvent::EnvOutcome { produced: true }) => {
                (CaptureState::Resolved(Resolution::Image), Vec::new())
            }
            (CaptureState::NativeTried, CaptureEvent::EnvOutcome { produced: false }) => (
                CaptureState::EnvSpecificTried,
                vec![CaptureAction::ProbeEmptiness],
            ),
            (
                CaptureState::NativeTried | CaptureState::EnvSpecificTried,
                CaptureEvent::Classified(failure),
            ) => (
                CaptureState::Resolved(Resolution::Failure(failure)),
                Vec::new(),
            ),
            (state, _event) => (state, Vec::new()),
        }
    }
}
