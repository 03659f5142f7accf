pub mod authenticator;
pub mod common;
pub mod configuration;
pub mod diagnostics;
pub mod logger;
