//! Click listeners on the post toggle buttons.
//!
//! Removing a listener needs the very reference that was added, so the
//! manager records each bound listener in a side map keyed by the button.

use std::collections::HashMap;

use tracing::debug;

use super::{POST_ID_KEY, toggle_comments};
use crate::dom::{Document, EventKind, Listener, NodeId, Selector, listener};
use crate::domain::ZeroIdPolicy;

/// Owner of the click listeners bound to post toggle buttons.
#[derive(Default)]
pub struct ListenerManager {
    attached: HashMap<NodeId, Listener>,
}

impl ListenerManager {
    /// Create a manager with no recorded listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a toggle listener to every button in `main` with an admitted post id.
    ///
    /// A button that already holds a recorded listener is detached first.
    /// Returns every button found in `main`.
    pub fn attach(
        &mut self,
        document: &mut Document,
        main: Option<NodeId>,
        policy: ZeroIdPolicy,
    ) -> Vec<NodeId> {
        self.attached
            .retain(|button, _| document.is_connected(*button));
        let buttons = buttons_in(document, main);
        for button in &buttons {
            let Some(post_id) = policy.admit_text(document.data(*button, POST_ID_KEY)) else {
                continue;
            };
            self.forget(document, *button);
            let handler = listener(move |document, event| {
                toggle_comments(document, Some(event), Some(post_id), policy);
            });
            document.add_event_listener(*button, EventKind::Click, Listener::clone(&handler));
            self.attached.insert(*button, handler);
        }
        debug!(
            buttons = buttons.len(),
            recorded = self.attached.len(),
            "attached comment toggle listeners"
        );
        buttons
    }

    /// Remove the recorded listener from every button in `main` with an
    /// admitted post id. Returns every button found in `main`.
    pub fn detach(
        &mut self,
        document: &mut Document,
        main: Option<NodeId>,
        policy: ZeroIdPolicy,
    ) -> Vec<NodeId> {
        let buttons = buttons_in(document, main);
        for button in &buttons {
            if policy
                .admit_text(document.data(*button, POST_ID_KEY))
                .is_some()
            {
                self.forget(document, *button);
            }
        }
        buttons
    }

    /// Listener currently recorded for `button`.
    #[must_use]
    pub fn recorded(&self, button: NodeId) -> Option<&Listener> {
        self.attached.get(&button)
    }

    /// Number of recorded listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// Whether no listener is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    fn forget(&mut self, document: &mut Document, button: NodeId) {
        if let Some(previous) = self.attached.remove(&button) {
            document.remove_event_listener(button, EventKind::Click, &previous);
        }
    }
}

fn buttons_in(document: &Document, main: Option<NodeId>) -> Vec<NodeId> {
    main.map(|main| document.query_selector_all_within(main, &Selector::tag("button")))
        .unwrap_or_default()
}
