//! Proxy installation and removal over a container.
//!
//! [`ProxyRegistry`] is a thin façade: `register` wraps a target in a
//! [`Proxy`] and installs it as the binding for the target's type,
//! `unregister` reinstalls a raw instance under the same key. Both are
//! keyed purely by the observer's *type*, never by instance identity, so at
//! most one mute configuration per type is active at any time and every
//! call is last-write-wins.

use std::sync::Arc;

use quell_core::events::MutedEvents;
use quell_core::observer::{Observer, ObserverId};
use quell_core::proxy::Proxy;
use tracing::debug;

use crate::container::{Container, ResolveError};

/// Installs and removes forwarding proxies in a shared container.
///
/// The registry holds the container it adapts; construct one at the
/// composition root and pass it wherever observers are muted or restored.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use quell_core::error::DispatchError;
/// use quell_core::observer::Observer;
/// use quell_registry::container::InstanceContainer;
/// use quell_registry::registry::ProxyRegistry;
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
/// let registry = ProxyRegistry::new(Arc::new(InstanceContainer::new()));
///
/// registry.register(PostObserver, ["created"]);
/// let proxied = registry.resolve::<PostObserver>().unwrap();
/// assert_eq!(proxied.dispatch("created", &[]).unwrap(), Value::Null);
///
/// registry.unregister(PostObserver);
/// let raw = registry.resolve::<PostObserver>().unwrap();
/// assert_eq!(
///     raw.dispatch("created", &[]).unwrap(),
///     Value::String("created".into()),
/// );
/// ```
#[derive(Clone)]
pub struct ProxyRegistry {
    container: Arc<dyn Container>,
}

impl ProxyRegistry {
    /// Creates a registry over the given container.
    #[must_use]
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self { container }
    }

    /// Wraps `target` in a [`Proxy`] muting `events` and installs it as the
    /// binding for `T`, replacing whatever binding previously existed.
    pub fn register<T: Observer>(&self, target: T, events: impl Into<MutedEvents>) {
        let id = ObserverId::of::<T>();
        let muted = events.into();

        debug!(observer = id.type_name(), muted = ?muted, "registering observer proxy");

        let proxy = Proxy::new(Arc::new(target), muted);
        self.container.bind_instance(id, Arc::new(proxy));
    }

    /// Installs `target` itself - unwrapped - as the binding for `T`,
    /// replacing any proxy.
    ///
    /// Idempotent: with no proxy installed this simply (re)binds the raw
    /// instance.
    pub fn unregister<T: Observer>(&self, target: T) {
        let id = ObserverId::of::<T>();

        debug!(observer = id.type_name(), "restoring unproxied observer");

        self.container.bind_instance(id, Arc::new(target));
    }

    /// Resolves the current binding for observer type `T`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotBound`] if neither `register` nor `unregister`
    /// has ever run for `T`.
    pub fn resolve<T: Observer>(&self) -> Result<Arc<dyn Observer>, ResolveError> {
        self.container.resolve(ObserverId::of::<T>())
    }

    /// Returns the container this registry adapts.
    #[must_use]
    pub fn container(&self) -> &Arc<dyn Container> {
        &self.container
    }
}

impl core::fmt::Debug for ProxyRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProxyRegistry").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use quell_core::error::DispatchError;
    use serde_json::{Value, json};

    use super::*;
    use crate::container::InstanceContainer;

    #[derive(Debug, Default)]
    struct PostObserver;

    impl Observer for PostObserver {
        fn operations(&self) -> &'static [&'static str] {
            &["created", "updated"]
        }

        fn invoke(&self, operation: &str, _args: &[Value]) -> Result<Value, DispatchError> {
            Ok(json!(operation))
        }
    }

    fn registry() -> ProxyRegistry {
        ProxyRegistry::new(Arc::new(InstanceContainer::new()))
    }

    #[test]
    fn register_installs_a_proxy() {
        let registry = registry();

        registry.register(PostObserver, ["created"]);

        let resolved = registry.resolve::<PostObserver>().unwrap();
        assert!(resolved.is::<Proxy>());
        assert_eq!(resolved.dispatch("created", &[]).unwrap(), Value::Null);
        assert_eq!(resolved.dispatch("updated", &[]).unwrap(), json!("updated"));
    }

    #[test]
    fn unregister_installs_the_raw_instance() {
        let registry = registry();

        registry.register(PostObserver, ["created"]);
        registry.unregister(PostObserver);

        let resolved = registry.resolve::<PostObserver>().unwrap();
        assert!(resolved.is::<PostObserver>());
        assert_eq!(resolved.dispatch("created", &[]).unwrap(), json!("created"));
    }

    #[test]
    fn register_twice_keeps_only_the_second_proxy() {
        let registry = registry();

        registry.register(PostObserver, ["created"]);
        registry.register(PostObserver, ["updated"]);

        let resolved = registry.resolve::<PostObserver>().unwrap();
        assert_eq!(resolved.dispatch("created", &[]).unwrap(), json!("created"));
        assert_eq!(resolved.dispatch("updated", &[]).unwrap(), Value::Null);
    }

    #[test]
    fn unregister_without_register_binds_the_raw_instance() {
        let registry = registry();

        registry.unregister(PostObserver);

        let resolved = registry.resolve::<PostObserver>().unwrap();
        assert!(resolved.is::<PostObserver>());
    }

    #[test]
    fn resolve_before_any_registration_fails() {
        let registry = registry();

        assert!(registry.resolve::<PostObserver>().is_err());
    }

    #[test]
    fn register_accepts_a_wildcard() {
        let registry = registry();

        registry.register(PostObserver, ["*"]);

        let resolved = registry.resolve::<PostObserver>().unwrap();
        assert_eq!(resolved.dispatch("created", &[]).unwrap(), Value::Null);
        assert_eq!(resolved.dispatch("updated", &[]).unwrap(), Value::Null);
    }
}
