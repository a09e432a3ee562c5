//! Muted-event sets and mute-request normalization.
//!
//! A [`MutedEvents`] set is fixed when a proxy is built and never changes
//! afterwards. Matching is exact and case-sensitive, with a single special
//! value: [`WILDCARD_EVENT`] matches every event name.
//!
//! Callers rarely build a [`MutedEvents`] by hand. A [`MuteSpec`] captures
//! the three shapes a mute request can take - nothing (mute everything), a
//! single event name, or an explicit list - and normalizes them:
//!
//! ```
//! use quell_core::events::{MuteSpec, MutedEvents, WILDCARD_EVENT};
//!
//! let all = MutedEvents::from(MuteSpec::All);
//! assert!(all.is_muted("anything"));
//!
//! let one = MutedEvents::from(MuteSpec::from("created"));
//! assert!(one.is_muted("created"));
//! assert!(!one.is_muted("updated"));
//!
//! assert_eq!(all.iter().collect::<Vec<_>>(), vec![WILDCARD_EVENT]);
//! ```

use serde::{Deserialize, Serialize};

/// Event name that mutes every event.
pub const WILDCARD_EVENT: &str = "*";

// ─────────────────────────────────────────────────────────────────────────────
// MutedEvents
// ─────────────────────────────────────────────────────────────────────────────

/// An ordered, immutable set of muted event names.
///
/// An empty set mutes nothing: every dispatch passes through to the target.
/// A set containing [`WILDCARD_EVENT`] mutes everything.
///
/// Serializes transparently as a plain list of names, so applications can
/// carry mute lists in configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MutedEvents {
    events: Vec<String>,
}

impl MutedEvents {
    /// Creates a set from an ordered sequence of event names.
    #[must_use]
    pub fn new<I, S>(events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            events: events.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an empty set: nothing is muted, full passthrough.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates the wildcard set: every event is muted.
    #[must_use]
    pub fn all() -> Self {
        Self {
            events: vec![WILDCARD_EVENT.to_string()],
        }
    }

    /// Returns true if `event` is muted by this set.
    ///
    /// Matching is case-sensitive and exact; the only non-literal match is
    /// [`WILDCARD_EVENT`], which mutes every name.
    #[must_use]
    pub fn is_muted(&self, event: &str) -> bool {
        self.events
            .iter()
            .any(|muted| muted == WILDCARD_EVENT || muted == event)
    }

    /// Returns the number of entries in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the set is empty (nothing muted).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the muted event names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for MutedEvents {
    fn from(events: Vec<String>) -> Self {
        Self { events }
    }
}

impl From<&[&str]> for MutedEvents {
    fn from(events: &[&str]) -> Self {
        Self::new(events.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for MutedEvents {
    fn from(events: [&str; N]) -> Self {
        Self::new(events)
    }
}

impl From<&str> for MutedEvents {
    fn from(event: &str) -> Self {
        Self::new([event])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MuteSpec
// ─────────────────────────────────────────────────────────────────────────────

/// A mute request before normalization.
///
/// Mirrors the three shapes a mute request can take: nothing at all, one
/// event name, or an explicit list. Converting into
/// [`MutedEvents`] normalizes the request:
///
/// - [`All`](Self::All) becomes `["*"]`
/// - [`One`](Self::One) becomes a one-element list
/// - [`Many`](Self::Many) is taken unchanged
///
/// Deserializes untagged - `null` is [`All`](Self::All), a string is
/// [`One`](Self::One), an array is [`Many`](Self::Many).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MuteSpec {
    /// Mute every event.
    All,
    /// Mute a single named event.
    One(String),
    /// Mute an explicit list of events.
    Many(Vec<String>),
}

impl From<&str> for MuteSpec {
    fn from(event: &str) -> Self {
        Self::One(event.to_string())
    }
}

impl From<String> for MuteSpec {
    fn from(event: String) -> Self {
        Self::One(event)
    }
}

impl From<Vec<String>> for MuteSpec {
    fn from(events: Vec<String>) -> Self {
        Self::Many(events)
    }
}

impl From<&[&str]> for MuteSpec {
    fn from(events: &[&str]) -> Self {
        Self::Many(events.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for MuteSpec {
    fn from(events: [&str; N]) -> Self {
        Self::Many(events.iter().map(ToString::to_string).collect())
    }
}

impl From<MuteSpec> for MutedEvents {
    fn from(spec: MuteSpec) -> Self {
        match spec {
            MuteSpec::All => Self::all(),
            MuteSpec::One(event) => Self { events: vec![event] },
            MuteSpec::Many(events) => Self { events },
        }
    }
}
