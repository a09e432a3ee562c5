//! Observer capability trait and type identity.
//!
//! An [`Observer`] exposes its lifecycle callbacks through one explicit
//! dispatch point instead of open-ended reflection:
//!
//! - [`operations()`](Observer::operations) is the forwarding table - the
//!   names the observer responds to
//! - [`invoke()`](Observer::invoke) runs the handler bound to one of those
//!   names
//! - [`dispatch()`](Observer::dispatch) is the single interception point:
//!   it resolves a name against the table and either delegates to `invoke`
//!   or fails with [`DispatchError::UnknownOperation`]
//!
//! Decorators such as [`Proxy`](crate::proxy::Proxy) implement the same
//! trait and override `dispatch`, which is why callers must always enter
//! through `dispatch` rather than calling `invoke` directly.
//!
//! [`ObserverId`] pairs a type's [`TypeId`] with its name so registries can
//! key bindings by observer *type* and still produce readable diagnostics.

use core::any::TypeId;

use downcast_rs::{DowncastSync, impl_downcast};
use serde_json::Value;

use crate::error::DispatchError;

// ─────────────────────────────────────────────────────────────────────────────
// Observer Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A lifecycle-event observer with a single generic dispatch point.
///
/// Any type whose event handlers can be named and invoked uniformly can
/// implement this trait. The contract is deliberately narrow: handlers
/// receive an ordered argument list of [`Value`]s and return a [`Value`],
/// and the dispatch layer never inspects or interprets the arguments.
///
/// # Implementing
///
/// Implementations provide [`operations()`](Self::operations) and
/// [`invoke()`](Self::invoke); everything else has a default.
///
/// ```
/// use quell_core::error::DispatchError;
/// use quell_core::observer::Observer;
/// use serde_json::Value;
///
/// #[derive(Debug, Default)]
/// struct PostObserver;
///
/// impl Observer for PostObserver {
///     fn operations(&self) -> &'static [&'static str] {
///         &["created", "deleted"]
///     }
///
///     fn invoke(&self, operation: &str, _args: &[Value]) -> Result<Value, DispatchError> {
///         match operation {
///             "created" => Ok(Value::String("post created".into())),
///             "deleted" => Ok(Value::String("post deleted".into())),
///             other => Err(DispatchError::unknown_operation(self.type_name(), other)),
///         }
///     }
/// }
///
/// let observer = PostObserver;
/// assert!(observer.handles("created"));
/// assert!(observer.dispatch("missing", &[]).is_err());
/// ```
pub trait Observer: DowncastSync {
    /// Returns the observer's type name, used as the registry key's label
    /// and in error messages.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// The names of the operations this observer responds to.
    fn operations(&self) -> &'static [&'static str];

    /// Invokes the handler bound to `operation` with the given ordered
    /// arguments.
    ///
    /// Only called with names from [`operations()`](Self::operations);
    /// behavior for other names is implementation-defined. Callers go
    /// through [`dispatch()`](Self::dispatch), which enforces that.
    ///
    /// # Errors
    ///
    /// Whatever the handler itself raises, typically
    /// [`DispatchError::OperationFailed`].
    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, DispatchError>;

    /// Returns true if `operation` is in the observer's operations table.
    fn handles(&self, operation: &str) -> bool {
        self.operations().iter().any(|known| *known == operation)
    }

    /// The single dispatch point: resolves `operation` against the
    /// operations table and delegates to [`invoke()`](Self::invoke).
    ///
    /// Decorators override this method to intercept calls; everything else
    /// should leave the default in place.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownOperation`] if the observer does not handle
    /// `operation`; otherwise whatever `invoke` raises.
    fn dispatch(&self, operation: &str, args: &[Value]) -> Result<Value, DispatchError> {
        if self.handles(operation) {
            self.invoke(operation, args)
        } else {
            Err(DispatchError::unknown_operation(
                self.type_name(),
                operation,
            ))
        }
    }
}

impl_downcast!(sync Observer);

// ─────────────────────────────────────────────────────────────────────────────
// ObserverId
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for an observer type.
///
/// Registries key their bindings by observer type, not by instance: two
/// instances of the same type share one slot. The cached type name keeps
/// diagnostics readable without another lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId {
    type_id: TypeId,
    type_name: &'static str,
}

impl ObserverId {
    /// Creates an `ObserverId` for the given observer type.
    #[must_use]
    pub fn of<T: Observer>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the type name for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default)]
    struct PostObserver;

    impl Observer for PostObserver {
        fn operations(&self) -> &'static [&'static str] {
            &["created", "updated", "concat"]
        }

        fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, DispatchError> {
            match operation {
                "created" => Ok(json!("created")),
                "updated" => Ok(json!("updated")),
                "concat" => {
                    let joined = args
                        .iter()
                        .map(|arg| match arg {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join("-");
                    Ok(json!(joined))
                }
                other => Err(DispatchError::unknown_operation(self.type_name(), other)),
            }
        }
    }

    #[derive(Debug, Default)]
    struct CommentObserver;

    impl Observer for CommentObserver {
        fn operations(&self) -> &'static [&'static str] {
            &[]
        }

        fn invoke(&self, operation: &str, _args: &[Value]) -> Result<Value, DispatchError> {
            Err(DispatchError::unknown_operation(self.type_name(), operation))
        }
    }

    #[test]
    fn dispatch_delegates_supported_operations() {
        let observer = PostObserver;

        assert_eq!(observer.dispatch("created", &[]).unwrap(), json!("created"));
        assert_eq!(observer.dispatch("updated", &[]).unwrap(), json!("updated"));
    }

    #[test]
    fn dispatch_passes_arguments_in_order() {
        let observer = PostObserver;

        let result = observer
            .dispatch("concat", &[json!("test"), json!(123)])
            .unwrap();

        assert_eq!(result, json!("test-123"));
    }

    #[test]
    fn dispatch_fails_for_unknown_operation() {
        let observer = PostObserver;

        let err = observer.dispatch("nonexistent", &[]).unwrap_err();

        match err {
            DispatchError::UnknownOperation {
                observer: name,
                operation,
            } => {
                assert!(name.contains("PostObserver"));
                assert_eq!(operation, "nonexistent");
            }
            other => panic!("expected UnknownOperation, got {other}"),
        }
    }

    #[test]
    fn handles_checks_the_operations_table() {
        let observer = PostObserver;

        assert!(observer.handles("created"));
        assert!(!observer.handles("Created"));
        assert!(!observer.handles("nonexistent"));
    }

    #[test]
    fn empty_operations_table_handles_nothing() {
        let observer = CommentObserver;

        assert!(!observer.handles("created"));
        assert!(observer.dispatch("created", &[]).is_err());
    }

    #[test]
    fn default_type_name_is_the_rust_type_path() {
        let observer = PostObserver;

        assert!(observer.type_name().contains("PostObserver"));
    }

    #[test]
    fn observer_id_equality_follows_the_type() {
        let id1 = ObserverId::of::<PostObserver>();
        let id2 = ObserverId::of::<PostObserver>();
        let id3 = ObserverId::of::<CommentObserver>();

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1.type_id(), TypeId::of::<PostObserver>());
        assert!(id1.type_name().contains("PostObserver"));
    }

    #[test]
    fn observers_downcast_to_their_concrete_type() {
        let observer: Box<dyn Observer> = Box::new(PostObserver);

        assert!(observer.is::<PostObserver>());
        assert!(!observer.is::<CommentObserver>());
        assert!(observer.downcast_ref::<PostObserver>().is_some());
    }
}
