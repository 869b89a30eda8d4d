//! # cj-core
//!
//! Core domain models and capture flow logic for clipjpg.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod capture;
pub mod environment;
pub mod error;

// Re-export commonly used types at the crate root
pub use capture::{
    CaptureAction, CaptureEvent, CaptureState, CaptureStateMachine, ClassifiedFailure, MimeTarget,
    Resolution,
};
pub use environment::{DetectionInput, Environment};
pub use error::CaptureError;
