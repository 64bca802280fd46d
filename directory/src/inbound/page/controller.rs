//! Page controller: initial load, selection handling, and the refresh cycle.
//!
//! The controller owns the document and the listener side map. It receives
//! the page regions it renders into instead of querying for them on every
//! call, and it routes select-menu change events through an in-process
//! queue drained by [`PageController::process_events`].

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{ListenerManager, Lookup, delete_child_elements, display_posts, populate_select_menu};
use crate::dom::{Document, Event, EventKind, Listener, NodeId, Selector, listener};
use crate::domain::ports::DirectorySource;
use crate::domain::{DirectoryClient, Post, User};

/// Document regions the page renders into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRegions {
    /// The `main` region receiving post articles.
    pub main: Option<NodeId>,
    /// The `select#selectMenu` user picker.
    pub select_menu: Option<NodeId>,
}

impl PageRegions {
    /// Locate the regions in `document`.
    #[must_use]
    pub fn locate(document: &Document) -> Self {
        Self {
            main: document.query_selector(&Selector::tag("main")),
            select_menu: document.query_selector(&Selector::id("selectMenu")),
        }
    }
}

/// Result of the initial page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    /// Users returned by the API, empty on failure.
    pub users: Vec<User>,
    /// The populated select menu.
    pub select_menu: Lookup<NodeId>,
}

/// Intermediate results of one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Buttons visited while detaching old listeners.
    pub detached: Vec<NodeId>,
    /// The cleared main region.
    pub main: Option<NodeId>,
    /// Node appended to the main region.
    ///
    /// An appended fragment is emptied and then freed at the end of the
    /// cycle, so its id is stale by the time the outcome is returned.
    pub rendered: Option<NodeId>,
    /// Buttons visited while attaching new listeners.
    pub attached: Vec<NodeId>,
}

/// Result of one selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// User id parsed from the select value.
    pub user_id: Option<u64>,
    /// Posts fetched for that user.
    pub posts: Option<Vec<Post>>,
    /// The refresh cycle run for those posts.
    pub refresh: Option<RefreshOutcome>,
}

/// Orchestrates the directory page over one document.
pub struct PageController<S: ?Sized> {
    document: Document,
    regions: PageRegions,
    listeners: ListenerManager,
    change_listener: Option<Listener>,
    events_tx: mpsc::UnboundedSender<QueuedChange>,
    events_rx: mpsc::UnboundedReceiver<QueuedChange>,
    client: DirectoryClient<S>,
}

impl<S: ?Sized> PageController<S> {
    /// Build a controller over the default page skeleton.
    pub fn new(client: DirectoryClient<S>) -> Self {
        Self::for_document(Document::page_skeleton(), client)
    }

    /// Build a controller over an existing document.
    pub fn for_document(document: Document, client: DirectoryClient<S>) -> Self {
        let regions = PageRegions::locate(&document);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            document,
            regions,
            listeners: ListenerManager::new(),
            change_listener: None,
            events_tx,
            events_rx,
            client,
        }
    }

    /// The page document.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access to the page document, for dispatching user events.
    pub const fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Regions located when the controller was built.
    pub const fn regions(&self) -> PageRegions {
        self.regions
    }

    /// Listener side map for the post toggle buttons.
    pub const fn listeners(&self) -> &ListenerManager {
        &self.listeners
    }

    /// Choose `user_id` in the select menu and fire its change event.
    ///
    /// Returns how many change listeners ran; a missing or disabled select
    /// menu runs none.
    pub fn choose_user(&mut self, user_id: u64) -> usize {
        let Some(select_menu) = self.regions.select_menu else {
            return 0;
        };
        if self.document.is_disabled(select_menu) {
            return 0;
        }
        self.document.set_value(select_menu, user_id.to_string());
        self.document.dispatch(select_menu, EventKind::Change)
    }
}

impl<S> PageController<S>
where
    S: DirectorySource + ?Sized,
{
    /// Fetch every user and populate the select menu.
    pub async fn init_page(&mut self) -> InitOutcome {
        let users = self.client.users().await;
        let select_menu =
            populate_select_menu(&mut self.document, self.regions.select_menu, Some(users.as_slice()));
        info!(users = users.len(), "directory page loaded");
        InitOutcome { users, select_menu }
    }

    /// Run the initial load, then route select-menu change events into the
    /// controller's event queue.
    pub async fn init_app(&mut self) -> InitOutcome {
        let outcome = self.init_page().await;
        if let Some(select_menu) = self.regions.select_menu {
            if self.change_listener.is_none() {
                let sender = self.events_tx.clone();
                let forward = listener(move |document, event| {
                    let change = QueuedChange {
                        event: *event,
                        value: document.value(event.target()),
                    };
                    if sender.send(change).is_err() {
                        warn!(node = ?event.target(), "page event queue closed; change dropped");
                    }
                });
                self.document
                    .add_event_listener(select_menu, EventKind::Change, Listener::clone(&forward));
                self.change_listener = Some(forward);
            }
        }
        outcome
    }

    /// Handle one change of the select menu.
    ///
    /// The select menu is disabled while the posts are fetched and
    /// re-rendered. `None` when there is no event.
    pub async fn on_selection_change(&mut self, event: Option<&Event>) -> Option<SelectionOutcome> {
        let select = event?.target();
        let value = self.document.value(select);
        Some(self.handle_selection(select, &value).await)
    }

    async fn handle_selection(&mut self, select: NodeId, value: &str) -> SelectionOutcome {
        self.document.set_disabled(select, true);
        debug!(
            disabled = self.document.is_disabled(select),
            "select menu locked for the selection cycle"
        );

        let user_id = parse_user_id(value);
        let posts = self.client.user_posts(user_id).await;
        let refresh = self.refresh_posts(posts.as_deref()).await;

        self.document.set_disabled(select, false);
        debug!(
            disabled = self.document.is_disabled(select),
            "select menu released"
        );
        info!(
            ?user_id,
            posts = posts.as_ref().map(Vec::len),
            "selection handled"
        );
        SelectionOutcome {
            user_id,
            posts,
            refresh,
        }
    }

    /// Replace the rendered posts: detach, clear, render, attach. Nodes left
    /// unreachable by the cycle are freed afterwards.
    ///
    /// `None` when `posts` is absent.
    pub async fn refresh_posts(&mut self, posts: Option<&[Post]>) -> Option<RefreshOutcome> {
        let posts = posts?;
        let policy = self.client.policy();
        let main = self.regions.main;

        let detached = self.listeners.detach(&mut self.document, main, policy);
        let cleared = delete_child_elements(&mut self.document, main);
        let rendered = display_posts(&mut self.document, &self.client, main, Some(posts)).await;
        let attached = self.listeners.attach(&mut self.document, main, policy);
        let freed = self.document.collect_garbage();
        debug!(
            detached = detached.len(),
            attached = attached.len(),
            freed,
            "refreshed posts"
        );

        Some(RefreshOutcome {
            detached,
            main: cleared,
            rendered,
            attached,
        })
    }

    /// Run the selection handler for every queued change event, in order.
    ///
    /// Each event is handled with the select value it was dispatched with.
    pub async fn process_events(&mut self) -> Vec<SelectionOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(change) = self.events_rx.try_recv() {
            if change.event.kind() != EventKind::Change {
                continue;
            }
            let outcome = self
                .handle_selection(change.event.target(), &change.value)
                .await;
            outcomes.push(outcome);
        }
        outcomes
    }
}

/// Change event captured together with the select value at dispatch time.
struct QueuedChange {
    event: Event,
    value: String,
}

fn parse_user_id(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
