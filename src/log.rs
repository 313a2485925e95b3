//! Default error reporting.

use tracing::error;

use crate::{ErrorHandler, BorderError};

/// The default error handler.
///
/// Logs every error it receives at the `ERROR` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
    fn call(&self, err: BorderError) {
        error!("{}", err)
    }
}
