//! Error signaling for YubiKey based login flows.
//!
//! [`LoginError`] is raised by the authentication routine that owns the
//! OTP check and propagated to the caller like any other error. The
//! remaining modules set up logging and report causal chains.

pub mod core;

pub use crate::core::authenticator::{LoginError, LoginResult};
pub use crate::core::diagnostics::report_failure;
