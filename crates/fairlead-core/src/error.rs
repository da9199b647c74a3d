// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Categorical I/O Errors
//!
//! Domain errors carried as values: a small categorical [`ErrorKind`] plus an
//! [`Error`] that optionally remembers the raw OS error code it was mapped
//! from. Errors propagate by explicit `Result` returns and the `?` operator;
//! they are never used as control flow inside the iteration core, which is
//! infallible by design.

use thiserror::Error as ThisError;

/// The raw error code reported by the operating system.
pub type RawOsError = i32;

/// A categorical classification of I/O failures.
///
/// The set is deliberately small: callers that need to branch on a failure
/// match on the kind, everything unclassified lands in [`ErrorKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThisError)]
pub enum ErrorKind {
    /// An entity was not found.
    #[error("entity not found")]
    NotFound,
    /// The operation lacked the necessary privileges.
    #[error("permission denied")]
    PermissionDenied,
    /// An entity already exists.
    #[error("entity already exists")]
    AlreadyExists,
    /// A directory was expected but something else was found.
    #[error("not a directory")]
    NotADirectory,
    /// Any error not covered by the other kinds.
    #[error("other error")]
    Other,
}

impl ErrorKind {
    /// Classifies a raw OS error code into a kind.
    ///
    /// Unrecognized codes map to [`ErrorKind::Other`].
    #[inline]
    pub fn from_raw_os_error(code: RawOsError) -> Self {
        match code {
            libc::ENOENT => ErrorKind::NotFound,
            libc::EPERM | libc::EACCES => ErrorKind::PermissionDenied,
            libc::EEXIST => ErrorKind::AlreadyExists,
            libc::ENOTDIR => ErrorKind::NotADirectory,
            _ => ErrorKind::Other,
        }
    }
}

/// A categorical I/O error, optionally carrying the raw OS error code
/// it was mapped from.
///
/// # Examples
///
/// ```rust
/// use fairlead_core::error::{Error, ErrorKind};
///
/// let err = Error::from_raw_os_error(libc::ENOENT);
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.raw_os_error(), Some(libc::ENOENT));
/// assert_eq!(format!("{}", err), format!("entity not found (os error {})", libc::ENOENT));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    code: Option<RawOsError>,
}

impl Error {
    /// Creates an error from a kind, without a raw OS error code.
    #[inline]
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self { kind, code: None }
    }

    /// Creates an error from a raw OS error code, classifying it into a kind.
    #[inline]
    pub fn from_raw_os_error(code: RawOsError) -> Self {
        Self {
            kind: ErrorKind::from_raw_os_error(code),
            code: Some(code),
        }
    }

    /// Returns the categorical kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the raw OS error code this error was mapped from, if any.
    #[inline]
    pub fn raw_os_error(&self) -> Option<RawOsError> {
        self.code
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Error::from_kind(kind)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (os error {})", self.kind, code),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` carrying [`Error`] in the failure slot.
///
/// Short-circuiting on the first failure is spelled with the `?` operator.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping_from_raw_os_error() {
        assert_eq!(
            ErrorKind::from_raw_os_error(libc::ENOENT),
            ErrorKind::NotFound
        );
        assert_eq!(
            ErrorKind::from_raw_os_error(libc::EPERM),
            ErrorKind::PermissionDenied
        );
        assert_eq!(
            ErrorKind::from_raw_os_error(libc::EACCES),
            ErrorKind::PermissionDenied
        );
        assert_eq!(
            ErrorKind::from_raw_os_error(libc::EEXIST),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            ErrorKind::from_raw_os_error(libc::ENOTDIR),
            ErrorKind::NotADirectory
        );
        assert_eq!(ErrorKind::from_raw_os_error(-1), ErrorKind::Other);
    }

    #[test]
    fn test_error_retains_raw_code() {
        let err = Error::from_raw_os_error(libc::EACCES);
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(err.raw_os_error(), Some(libc::EACCES));

        let err = Error::from_kind(ErrorKind::Other);
        assert_eq!(err.raw_os_error(), None);
    }

    #[test]
    fn test_display_with_and_without_code() {
        let err = Error::from_raw_os_error(libc::ENOENT);
        assert_eq!(
            format!("{}", err),
            format!("entity not found (os error {})", libc::ENOENT)
        );

        let err = Error::from_kind(ErrorKind::NotADirectory);
        assert_eq!(format!("{}", err), "not a directory");
    }

    #[test]
    fn test_question_mark_propagation() {
        fn open_like(exists: bool) -> Result<u32> {
            if !exists {
                return Err(Error::from_raw_os_error(libc::ENOENT));
            }
            Ok(7)
        }

        fn chain(exists: bool) -> Result<u32> {
            let fd = open_like(exists)?;
            Ok(fd + 1)
        }

        assert_eq!(chain(true), Ok(8));
        assert_eq!(chain(false).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_from_kind_conversion() {
        let err: Error = ErrorKind::AlreadyExists.into();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }
}
