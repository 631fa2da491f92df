//! Error types.

use thiserror::Error;

/// Errors raised by the terminal session lifecycle.
///
/// The widget core itself is pure state transition and has no error
/// taxonomy; everything fallible lives at the terminal boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw mode, screen switching, or event reading failed.
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),
}
