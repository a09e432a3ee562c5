//! Mute/unmute capability for default-constructible observers.
//!
//! [`Muteable`] is blanket-implemented for every `Observer + Default` type,
//! so adopting the capability costs nothing. Its methods operate on observer
//! *types*, not on already-resolved instances - the fresh
//! [`Default`] instance they build is only a vehicle carrying the type
//! identity into the registry, matching the registry's type-keyed model.

use quell_core::events::MuteSpec;
use quell_core::observer::Observer;

use crate::registry::ProxyRegistry;

/// Class-level mute/unmute operations for an observer type.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use quell_core::error::DispatchError;
/// use quell_core::observer::Observer;
/// use quell_registry::container::InstanceContainer;
/// use quell_registry::muteable::Muteable;
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
/// // One event, a list, or everything:
/// PostObserver::mute(&registry, "created");
/// PostObserver::mute(&registry, ["created", "updated"]);
/// PostObserver::mute_all(&registry);
///
/// let observer = registry.resolve::<PostObserver>().unwrap();
/// assert_eq!(observer.dispatch("updated", &[]).unwrap(), Value::Null);
///
/// PostObserver::unmute(&registry);
/// let observer = registry.resolve::<PostObserver>().unwrap();
/// assert_eq!(
///     observer.dispatch("updated", &[]).unwrap(),
///     Value::String("updated".into()),
/// );
/// ```
pub trait Muteable: Observer + Default {
    /// Mutes the given events for this observer type.
    ///
    /// Accepts a single event name, an explicit list, or
    /// [`MuteSpec::All`]; the request is normalized and a proxy wrapping a
    /// fresh default instance is installed in the registry's container.
    fn mute(registry: &ProxyRegistry, events: impl Into<MuteSpec>)
    where
        Self: Sized,
    {
        let spec: MuteSpec = events.into();
        registry.register(Self::default(), spec);
    }

    /// Mutes every event for this observer type.
    ///
    /// Equivalent to `mute` with [`MuteSpec::All`], which normalizes to the
    /// wildcard set.
    fn mute_all(registry: &ProxyRegistry)
    where
        Self: Sized,
    {
        Self::mute(registry, MuteSpec::All);
    }

    /// Unmutes all events for this observer type by reinstalling a fresh,
    /// unproxied default instance.
    fn unmute(registry: &ProxyRegistry)
    where
        Self: Sized,
    {
        registry.unregister(Self::default());
    }
}

impl<T: Observer + Default> Muteable for T {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quell_core::error::DispatchError;
    use quell_core::events::WILDCARD_EVENT;
    use quell_core::observer::Observer;
    use quell_core::proxy::Proxy;
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
    fn mute_with_a_single_name_normalizes_to_one_element() {
        let registry = registry();

        PostObserver::mute(&registry, "created");

        let resolved = registry.resolve::<PostObserver>().unwrap();
        let proxy = resolved.downcast_ref::<Proxy>().unwrap();
        assert_eq!(proxy.muted().iter().collect::<Vec<_>>(), vec!["created"]);
    }

    #[test]
    fn mute_with_a_list_is_taken_unchanged() {
        let registry = registry();

        PostObserver::mute(&registry, ["created", "updated"]);

        let resolved = registry.resolve::<PostObserver>().unwrap();
        let proxy = resolved.downcast_ref::<Proxy>().unwrap();
        assert_eq!(
            proxy.muted().iter().collect::<Vec<_>>(),
            vec!["created", "updated"]
        );
    }

    #[test]
    fn mute_all_normalizes_to_the_wildcard() {
        let registry = registry();

        PostObserver::mute_all(&registry);

        let resolved = registry.resolve::<PostObserver>().unwrap();
        let proxy = resolved.downcast_ref::<Proxy>().unwrap();
        assert_eq!(
            proxy.muted().iter().collect::<Vec<_>>(),
            vec![WILDCARD_EVENT]
        );
    }

    #[test]
    fn muted_observer_swallows_the_event() {
        let registry = registry();

        PostObserver::mute(&registry, "created");

        let resolved = registry.resolve::<PostObserver>().unwrap();
        assert_eq!(resolved.dispatch("created", &[]).unwrap(), Value::Null);
        assert_eq!(resolved.dispatch("updated", &[]).unwrap(), json!("updated"));
    }

    #[test]
    fn unmute_restores_the_raw_observer() {
        let registry = registry();

        PostObserver::mute_all(&registry);
        PostObserver::unmute(&registry);

        let resolved = registry.resolve::<PostObserver>().unwrap();
        assert!(resolved.is::<PostObserver>());
        assert_eq!(resolved.dispatch("created", &[]).unwrap(), json!("created"));
    }
}
