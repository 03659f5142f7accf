use std::error::Error;

use crate::core::common::BoxedError;

pub type LoginResult<T> = Result<T, LoginError>;

/// Failure raised by a YubiKey login routine.
///
/// Carries a human readable message and, optionally, the lower level error
/// (network, crypto, storage...) that caused it. Both are fixed at construction.
#[derive(Debug)]
pub struct LoginError {
    message: String,
    cause: Option<BoxedError>,
}

impl LoginError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxedError>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl std::fmt::Display for LoginError {
    /// `{}` writes the message only, `{:#}` appends every cause of the chain.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;

        if f.alternate() {
            let mut next = self.source();
            while let Some(cause) = next {
                write!(f, ": {}", cause)?;
                next = cause.source();
            }
        }

        Ok(())
    }
}

impl Error for LoginError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
