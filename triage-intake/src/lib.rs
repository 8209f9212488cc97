//! Patient intake wizard for CTAS triage.
//!
//! The wizard walks a user through demographics, chief complaint and vital
//! signs, validates inputs against a medical range table, and hands the form
//! to a remote scoring service. Rendering and dialogs are supplied by the
//! caller through [`intake::IntakeView`].

pub mod config;
pub mod error;
mod http_client;
pub mod intake;

pub use config::IntakeConfig;
pub use error::{IntakeError, Result};
