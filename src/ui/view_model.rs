//! Session object for the list screen.
//!
//! Owns the repository for the lifetime of the display session, turns
//! action starts/completions and cache emissions into [`ListIntent`]s, and
//! publishes the reduced [`ListViewState`] on a `watch` channel.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::actions::Action;
use crate::cancel::CancelToken;
use crate::fetch::FetchClient;
use crate::item::{Item, ItemList};
use crate::repository::ItemRepository;
use crate::ui::list::{ListIntent, ListReducer, ListViewState};
use crate::ui::mvi::Reducer;

pub struct ListViewModel<C: FetchClient + 'static> {
    repository: Arc<ItemRepository<C>>,
    state: Arc<watch::Sender<ListViewState>>,
    cancel: CancelToken,
    items_task: Mutex<Option<JoinHandle<()>>>,
}

impl<C: FetchClient + 'static> ListViewModel<C> {
    /// Create the view model and subscribe to the repository's stream.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(repository: Arc<ItemRepository<C>>) -> Self {
        let (state, _) = watch::channel(ListViewState::default());
        let state = Arc::new(state);
        let cancel = CancelToken::new();

        let items_task = tokio::spawn(forward_items(
            repository.subscribe(),
            Arc::clone(&state),
            cancel.clone(),
        ));

        tracing::info!(paging = ?repository.paging(), "List session started");

        Self {
            repository,
            state,
            cancel,
            items_task: Mutex::new(Some(items_task)),
        }
    }

    /// Subscribe to view state. The current state is available immediately.
    pub fn state(&self) -> watch::Receiver<ListViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ListViewState {
        self.state.borrow().clone()
    }

    pub fn repository(&self) -> &Arc<ItemRepository<C>> {
        &self.repository
    }

    /// Start `action` in the background.
    ///
    /// The matching loading flag is raised before this returns. On
    /// completion the repository's current list is reduced first, then the
    /// outcome, so a cleared flag never shows stale items. The handle
    /// resolves after both.
    pub fn dispatch(&self, action: Action) -> JoinHandle<()> {
        let kind = action.kind();
        apply(&self.state, ListIntent::Started { kind });

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(action = ?kind, "Action cancelled");
                }
                result = action.run(&repository) => {
                    apply(&state, ListIntent::ItemsChanged { items: repository.current() });
                    apply(&state, ListIntent::Finished { kind, result });
                }
            }
        })
    }

    pub fn reload(&self) -> JoinHandle<()> {
        self.dispatch(Action::Reload)
    }

    pub fn load_more(&self) -> JoinHandle<()> {
        self.dispatch(Action::LoadNextPage)
    }

    pub fn search(&self, query: impl Into<String>) -> JoinHandle<()> {
        self.dispatch(Action::Search(query.into()))
    }

    pub fn refresh(&self, query: impl Into<String>) -> JoinHandle<()> {
        self.dispatch(Action::Refresh(query.into()))
    }

    /// Clear the error notice. Other fields are untouched.
    pub fn reset_error(&self) {
        apply(&self.state, ListIntent::ResetError);
    }

    /// Item for the detail view, from the published list.
    pub fn item(&self, id: u64) -> Option<Item> {
        self.state.borrow().item(id).cloned()
    }

    /// Cancel in-flight actions and stop following the repository.
    ///
    /// State keeps its last value; flags of cancelled actions stay raised.
    pub fn close(&self) {
        self.cancel.cancel();
        if let Some(task) = self.items_task.lock().take() {
            task.abort();
            tracing::info!("List session closed");
        }
    }
}

impl<C: FetchClient + 'static> Drop for ListViewModel<C> {
    fn drop(&mut self) {
        self.close();
    }
}

fn apply(state: &watch::Sender<ListViewState>, intent: ListIntent) {
    state.send_if_modified(|current| {
        let next = ListReducer::reduce(current.clone(), intent);
        if next == *current {
            return false;
        }
        *current = next;
        true
    });
}

async fn forward_items(
    mut items: watch::Receiver<ItemList>,
    state: Arc<watch::Sender<ListViewState>>,
    cancel: CancelToken,
) {
    loop {
        let latest = items.borrow_and_update().clone();
        apply(&state, ListIntent::ItemsChanged { items: latest });

        tokio::select! {
            _ = cancel.cancelled() => break,
            changed = items.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
}
