//! Dispatch failures.
//!
//! There is one hard failure in the whole dispatch surface: asking an
//! observer for an operation it does not have. Everything an observer's own
//! handler raises is carried through unchanged as
//! [`DispatchError::OperationFailed`].

/// Errors that can occur while dispatching an operation to an observer.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The operation is neither muted nor present in the observer's
    /// operations table.
    ///
    /// This signals a programming error on the caller's side, not a
    /// recoverable condition: there is no valid fallback for invoking a
    /// nonexistent operation.
    #[error("unknown operation [{observer}@{operation}]")]
    UnknownOperation {
        /// Type name of the observer that was asked.
        observer: &'static str,
        /// The operation name that was requested.
        operation: String,
    },

    /// The observer's handler for the operation failed.
    ///
    /// Proxies forward this untouched, so the error a caller sees is exactly
    /// the error the target raised.
    #[error("operation [{operation}] failed: {source}")]
    OperationFailed {
        /// The operation whose handler failed.
        operation: String,
        /// The underlying failure raised by the handler.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DispatchError {
    /// Creates an [`UnknownOperation`](Self::UnknownOperation) error.
    #[must_use]
    pub fn unknown_operation(observer: &'static str, operation: impl Into<String>) -> Self {
        Self::UnknownOperation {
            observer,
            operation: operation.into(),
        }
    }

    /// Wraps a handler failure as [`OperationFailed`](Self::OperationFailed).
    #[must_use]
    pub fn operation_failed(
        operation: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::OperationFailed {
            operation: operation.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_operation_names_observer_and_operation() {
        let err = DispatchError::unknown_operation("app::PostObserver", "nonexistent");

        assert_eq!(
            err.to_string(),
            "unknown operation [app::PostObserver@nonexistent]"
        );
    }

    #[test]
    fn operation_failed_carries_source() {
        let err = DispatchError::operation_failed("created", "database unavailable");

        assert_eq!(
            err.to_string(),
            "operation [created] failed: database unavailable"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
