//! Container boundary trait and in-process implementation.
//!
//! [`Container`] is the narrow surface the mute layer needs from whatever
//! object store the host application resolves its shared instances from:
//! bind an instance under a type key (overwriting any prior binding) and
//! resolve the current binding for a type key. Nothing else.
//!
//! [`InstanceContainer`] is the in-process implementation used when no host
//! framework provides one. Each observer type has at most one slot, and
//! every bind is last-write-wins - there is no history and no reference
//! counting.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;
use quell_core::observer::{Observer, ObserverId};

// ─────────────────────────────────────────────────────────────────────────────
// ResolveError
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur when resolving from a container.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No instance is bound for the requested observer type.
    #[error("no instance bound for observer type: {0}")]
    NotBound(&'static str),
}

// ─────────────────────────────────────────────────────────────────────────────
// Container Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The two-operation surface of a type-keyed instance store.
///
/// Implement this to back the mute layer with a host framework's own
/// container; [`InstanceContainer`] is the default in-process
/// implementation.
pub trait Container: Send + Sync {
    /// Binds `instance` under `id`, replacing whatever binding - raw or
    /// proxied - previously existed for that type.
    fn bind_instance(&self, id: ObserverId, instance: Arc<dyn Observer>);

    /// Resolves the current binding for `id`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotBound`] if nothing has ever been bound for the
    /// type.
    fn resolve(&self, id: ObserverId) -> Result<Arc<dyn Observer>, ResolveError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// InstanceContainer
// ─────────────────────────────────────────────────────────────────────────────

/// In-process, type-keyed instance store.
///
/// One binding per observer type. Individual `bind`/`resolve` calls are
/// data-race free, but sequences of them are not atomic; callers that need
/// cross-operation consistency must serialize externally.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use quell_core::error::DispatchError;
/// use quell_core::observer::{Observer, ObserverId};
/// use quell_registry::container::{Container, InstanceContainer};
/// use serde_json::Value;
///
/// #[derive(Debug, Default)]
/// struct PostObserver;
///
/// impl Observer for PostObserver {
///     fn operations(&self) -> &'static [&'static str] {
///         &["created"]
///     }
///
///     fn invoke(&self, _operation: &str, _args: &[Value]) -> Result<Value, DispatchError> {
///         Ok(Value::Null)
///     }
/// }
///
/// let container = InstanceContainer::new();
/// container.bind_instance(ObserverId::of::<PostObserver>(), Arc::new(PostObserver));
///
/// assert!(container.contains::<PostObserver>());
/// let observer = container.resolve_of::<PostObserver>().unwrap();
/// assert!(observer.handles("created"));
/// ```
#[derive(Default)]
pub struct InstanceContainer {
    bindings: RwLock<HashMap<ObserverId, Arc<dyn Observer>>>,
}

impl InstanceContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a binding exists for observer type `T`.
    #[must_use]
    pub fn contains<T: Observer>(&self) -> bool {
        self.contains_id(ObserverId::of::<T>())
    }

    /// Returns true if a binding exists for `id`.
    #[must_use]
    pub fn contains_id(&self, id: ObserverId) -> bool {
        self.bindings.read().contains_key(&id)
    }

    /// Resolves the current binding for observer type `T`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotBound`] if nothing is bound for `T`.
    pub fn resolve_of<T: Observer>(&self) -> Result<Arc<dyn Observer>, ResolveError> {
        self.resolve(ObserverId::of::<T>())
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    /// Returns true if the container holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }

    /// Lists the type names of all bound observers.
    #[must_use]
    pub fn bound_types(&self) -> Vec<&'static str> {
        self.bindings.read().keys().map(ObserverId::type_name).collect()
    }
}

impl core::fmt::Debug for InstanceContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InstanceContainer")
            .field("bindings", &self.bound_types())
            .finish()
    }
}

impl Container for InstanceContainer {
    fn bind_instance(&self, id: ObserverId, instance: Arc<dyn Observer>) {
        self.bindings.write().insert(id, instance);
    }

    fn resolve(&self, id: ObserverId) -> Result<Arc<dyn Observer>, ResolveError> {
        self.bindings
            .read()
            .get(&id)
            .cloned()
            .ok_or(ResolveError::NotBound(id.type_name()))
    }
}
