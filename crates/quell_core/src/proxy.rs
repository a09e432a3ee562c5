//! Forwarding proxy decorator.
//!
//! A [`Proxy`] pairs exactly one target observer with exactly one
//! [`MutedEvents`] set. It implements [`Observer`] itself and overrides the
//! dispatch point: muted events return [`Value::Null`] without the target
//! ever being consulted, everything else is forwarded and its result - value
//! or error - returned unchanged.
//!
//! Because the mute test runs before the operations-table lookup, muting an
//! event the target does not have is not an error; the name is matched and
//! suppressed like any other. With an empty muted set the proxy is a pure
//! transparent passthrough.

use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::error::DispatchError;
use crate::events::MutedEvents;
use crate::observer::Observer;

/// A transparent stand-in that suppresses muted events and forwards the
/// rest to the wrapped observer.
///
/// The proxy exposes the exact capability surface of its target -
/// [`type_name`](Observer::type_name), [`operations`](Observer::operations)
/// and [`invoke`](Observer::invoke) all forward - so code holding an
/// `Arc<dyn Observer>` cannot tell a proxied observer from a raw one.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use quell_core::error::DispatchError;
/// use quell_core::events::MutedEvents;
/// use quell_core::observer::Observer;
/// use quell_core::proxy::Proxy;
/// use serde_json::Value;
///
/// #[derive(Debug, Default)]
/// struct PostObserver;
///
/// impl Observer for PostObserver {
///     fn operations(&self) -> &'static [&'static str] {
///         &["created", "updated"]
///     }
///
///     fn invoke(&self, operation: &str, _args: &[Value]) -> Result<Value, DispatchError> {
///         Ok(Value::String(operation.to_string()))
///     }
/// }
///
/// let proxy = Proxy::new(Arc::new(PostObserver), MutedEvents::new(["created"]));
///
/// assert_eq!(proxy.dispatch("created", &[]).unwrap(), Value::Null);
/// assert_eq!(
///     proxy.dispatch("updated", &[]).unwrap(),
///     Value::String("updated".into()),
/// );
/// ```
pub struct Proxy {
    /// The wrapped observer. Exclusively referenced by this proxy; the
    /// proxy never mutates it.
    target: Arc<dyn Observer>,

    /// The events to suppress, fixed at construction.
    muted: MutedEvents,
}

impl Proxy {
    /// Creates a proxy that mutes the given events on `target`.
    #[must_use]
    pub fn new(target: Arc<dyn Observer>, muted: MutedEvents) -> Self {
        Self { target, muted }
    }

    /// Creates a proxy with nothing muted: a pure transparent passthrough.
    #[must_use]
    pub fn passthrough(target: Arc<dyn Observer>) -> Self {
        Self::new(target, MutedEvents::none())
    }

    /// Returns the wrapped observer.
    #[must_use]
    pub fn target(&self) -> &Arc<dyn Observer> {
        &self.target
    }

    /// Returns the muted-event set.
    #[must_use]
    pub fn muted(&self) -> &MutedEvents {
        &self.muted
    }
}

impl core::fmt::Debug for Proxy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Proxy")
            .field("target", &self.target.type_name())
            .field("muted", &self.muted)
            .finish()
    }
}

impl Observer for Proxy {
    fn type_name(&self) -> &'static str {
        self.target.type_name()
    }

    fn operations(&self) -> &'static [&'static str] {
        self.target.operations()
    }

    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, DispatchError> {
        self.target.invoke(operation, args)
    }

    fn dispatch(&self, operation: &str, args: &[Value]) -> Result<Value, DispatchError> {
        if self.muted.is_muted(operation) {
            trace!(
                observer = self.target.type_name(),
                operation, "muted event suppressed"
            );
            return Ok(Value::Null);
        }

        self.target.dispatch(operation, args)
    }
}
