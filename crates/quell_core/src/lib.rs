//! Core primitives for muting observer events.
//!
//! `quell_core` provides everything needed to wrap an observer in a
//! transparent stand-in that suppresses selected lifecycle events:
//!
//! - [`observer`] - The [`Observer`](observer::Observer) capability trait and
//!   [`ObserverId`](observer::ObserverId) type identity
//! - [`events`] - Muted-event sets and mute-request normalization
//! - [`proxy`] - The forwarding [`Proxy`](proxy::Proxy) decorator
//! - [`error`] - Dispatch failures
//!
//! # Design
//!
//! Observers expose their lifecycle callbacks through a single explicit
//! dispatch point, [`Observer::dispatch`](observer::Observer::dispatch),
//! rather than through open-ended reflection. A [`Proxy`](proxy::Proxy)
//! implements the same capability as the observer it wraps and intercepts at
//! that one point: a muted event returns [`Value::Null`](serde_json::Value)
//! without ever reaching the target, anything else is forwarded unchanged.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use quell_core::error::DispatchError;
//! use quell_core::events::MutedEvents;
//! use quell_core::observer::Observer;
//! use quell_core::proxy::Proxy;
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
//! let proxy = Proxy::new(Arc::new(PostObserver), MutedEvents::new(["created"]));
//!
//! // Muted events are swallowed without touching the target.
//! assert_eq!(proxy.dispatch("created", &[]).unwrap(), Value::Null);
//!
//! // Everything else passes straight through.
//! assert_eq!(
//!     proxy.dispatch("updated", &[]).unwrap(),
//!     Value::String("updated".into()),
//! );
//! ```

/// Dispatch failures.
pub mod error;

/// Muted-event sets and mute-request normalization.
pub mod events;

/// Observer capability trait and type identity.
pub mod observer;

/// Forwarding proxy decorator.
pub mod proxy;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::error::*;
    pub use crate::events::*;
    pub use crate::observer::*;
    pub use crate::proxy::*;
}
