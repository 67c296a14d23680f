use std::fmt;

use anyhow::Error;

/// Classification of a failed operation.
///
/// The console distinguishes four failure classes because they recover
/// differently: validation errors never leave the client, backend rejections
/// carry a status and a verbatim message for the user to act on, and
/// transport/timeout failures are generic "try again" conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client-detected validation failure. No request was made.
    Validation,
    /// The backend answered with a non-2xx status.
    Backend(u16),
    /// The request never completed (connection refused, DNS, broken pipe).
    Transport,
    /// The request exceeded the per-request ceiling.
    Timeout,
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn validation<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, err)
    }

    pub fn backend<E>(status: u16, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Backend(status), err)
    }

    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Transport, err)
    }

    pub fn timeout<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Timeout, err)
    }

    /// True for HTTP 401 responses. The gateway deliberately does not act on
    /// these; callers decide whether to re-authenticate.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.kind, ErrorKind::Backend(401))
    }

    /// True when the failure was detected before any request was issued.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::transport(err)
    }
}
