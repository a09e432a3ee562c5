//! Temporarily mute lifecycle-event observers behind a transparent
//! forwarding proxy.
//!
//! Applications register an observer instance together with the events to
//! silence; everything else keeps resolving that observer by type from a
//! shared container and transparently receives a stand-in that swallows the
//! muted events and forwards the rest.
//!
//! The workspace is split in two:
//!
//! - `quell_core` - the [`Observer`](observer::Observer) capability,
//!   [`MutedEvents`](events::MutedEvents) sets, and the
//!   [`Proxy`](proxy::Proxy) decorator
//! - `quell_registry` - the injectable
//!   [`Container`](container::Container) boundary, the
//!   [`ProxyRegistry`](registry::ProxyRegistry) façade, and the
//!   [`Muteable`](muteable::Muteable) capability
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use quell::prelude::*;
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
//! let registry = ProxyRegistry::new(Arc::new(InstanceContainer::new()));
//!
//! PostObserver::mute(&registry, ["created"]);
//!
//! let observer = registry.resolve::<PostObserver>().unwrap();
//! assert_eq!(observer.dispatch("created", &[]).unwrap(), Value::Null);
//! assert_eq!(
//!     observer.dispatch("updated", &[]).unwrap(),
//!     Value::String("updated".into()),
//! );
//! ```

pub use quell_core::{error, events, observer, proxy};
pub use quell_registry::{container, muteable, registry};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use quell_core::prelude::*;
    pub use quell_registry::prelude::*;
}
