//! Error types.

use blankslate_core::ObjectError;
use thiserror::Error;

use crate::host::ReloadEntry;

/// Errors raised while binding an overlay to a host.
#[derive(Debug, Error)]
pub enum BlankSlateError {
    /// A registry operation failed.
    #[error("view registry error: {0}")]
    Registry(#[from] ObjectError),

    /// The host type does not implement an entry point the library needs
    /// to intercept.
    #[error("host type `{host_type}` does not implement {entry}")]
    UnsupportedHost {
        host_type: &'static str,
        entry: ReloadEntry,
    },
}

/// Result alias for fallible overlay operations.
pub type BlankSlateResult<T> = std::result::Result<T, BlankSlateError>;
