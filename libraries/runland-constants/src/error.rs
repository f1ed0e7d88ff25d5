use crate::ErrNo;
use std::borrow::Cow;
use std::fmt;

/// The result type threaded through every fallible internal function: an
/// errno code plus a short diagnostic message for logging.
#[derive(Debug, Clone)]
pub struct ExecError {
    pub errno: ErrNo,
    pub message: Cow<'static, str>,
}

impl ExecError {
    pub fn new(errno: ErrNo, message: impl Into<Cow<'static, str>>) -> Self {
        ExecError {
            errno,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.message, self.errno)
    }
}

impl std::error::Error for ExecError {}

impl ExecError {
    /// Build an `ExecError` from an `io::Error`, mapping its raw OS errno
    /// when available and falling back to `InvalidArgument` for errors
    /// that did not originate at the syscall boundary (e.g. a UTF-8
    /// conversion failure surfaced as `io::Error`).
    pub fn from_io(err: std::io::Error, context: impl Into<Cow<'static, str>>) -> Self {
        let errno = err
            .raw_os_error()
            .map(|raw| ErrNo::from_raw(-(raw as isize)))
            .unwrap_or(ErrNo::InvalidArgument);
        ExecError::new(errno, context)
    }
}

pub type ExecResult<T> = Result<T, ExecError>;
