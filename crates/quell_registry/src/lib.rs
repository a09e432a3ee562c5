//! Type-keyed observer bindings and the mute/unmute registry for quell.
//!
//! This crate owns everything between an application's composition root and
//! the [`Proxy`](quell_core::proxy::Proxy) decorator:
//!
//! - [`container`] - The [`Container`](container::Container) boundary trait
//!   (bind-instance / resolve-by-type) and the in-process
//!   [`InstanceContainer`](container::InstanceContainer)
//! - [`registry`] - The [`ProxyRegistry`](registry::ProxyRegistry) façade
//!   that installs and removes proxies
//! - [`muteable`] - The [`Muteable`](muteable::Muteable) capability trait
//!   giving any default-constructible observer `mute` / `unmute`
//!
//! # Composition root
//!
//! The container is an explicit, injectable object - there is no ambient
//! global. Applications build one container and one registry at startup and
//! pass them to whatever needs to mute, unmute, or resolve observers:
//!
//! ```
//! use std::sync::Arc;
//!
//! use quell_core::error::DispatchError;
//! use quell_core::observer::Observer;
//! use quell_registry::container::InstanceContainer;
//! use quell_registry::muteable::Muteable;
//! use quell_registry::registry::ProxyRegistry;
//! use serde_json::Value;
//!
//! #[derive(Debug, Default)]
//! struct PostObserver;
//!
//! impl Observer for PostObserver {
//!     fn operations(&self) -> &'static [&'static str] {
//!         &["created", "updated"]
//!     }
//!
//!     fn invoke(&self, operation: &str, _args: &[Value]) -> Result<Value, DispatchError> {
//!         Ok(Value::String(operation.to_string()))
//!     }
//! }
//!
//! // Composition root: one container, one registry.
//! let container = Arc::new(InstanceContainer::new());
//! let registry = ProxyRegistry::new(container);
//!
//! // Mute `created` for every resolved PostObserver.
//! PostObserver::mute(&registry, "created");
//!
//! let observer = registry.resolve::<PostObserver>().unwrap();
//! assert_eq!(observer.dispatch("created", &[]).unwrap(), Value::Null);
//! assert_eq!(
//!     observer.dispatch("updated", &[]).unwrap(),
//!     Value::String("updated".into()),
//! );
//!
//! // Restore the unproxied observer.
//! PostObserver::unmute(&registry);
//! let observer = registry.resolve::<PostObserver>().unwrap();
//! assert_eq!(
//!     observer.dispatch("created", &[]).unwrap(),
//!     Value::String("created".into()),
//! );
//! ```

/// Container boundary trait and in-process implementation.
pub mod container;

/// Mute/unmute capability for default-constructible observers.
pub mod muteable;

/// Proxy installation and removal over a container.
pub mod registry;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::container::*;
    pub use crate::muteable::*;
    pub use crate::registry::*;
}
