//! Event kinds, dispatched events, and listener references.

use std::fmt;
use std::sync::Arc;

use super::{Document, NodeId};

/// Event types the document can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer activation of an element, such as a button.
    Click,
    /// Committed value change of a form control, such as a select menu.
    Change,
}

impl EventKind {
    /// Return the DOM event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    target: NodeId,
}

impl Event {
    /// Build an event of `kind` aimed at `target`.
    #[must_use]
    pub const fn new(kind: EventKind, target: NodeId) -> Self {
        Self { kind, target }
    }

    /// Event type.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Node the event was dispatched on.
    #[must_use]
    pub const fn target(&self) -> NodeId {
        self.target
    }
}

/// Shared reference to an event handler.
///
/// Removing a listener requires the same reference that was added: two
/// listeners with identical bodies are still distinct.
pub type Listener = Arc<dyn Fn(&mut Document, &Event) + Send + Sync>;

/// Wrap a closure as a [`Listener`].
pub fn listener<F>(handler: F) -> Listener
where
    F: Fn(&mut Document, &Event) + Send + Sync + 'static,
{
    Arc::new(handler)
}

/// Return whether two listener references point at the same handler.
#[must_use]
pub fn same_listener(left: &Listener, right: &Listener) -> bool {
    Arc::ptr_eq(left, right)
}
