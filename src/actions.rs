//! User-facing operations on the item cache.
//!
//! An action wraps exactly one repository call and hands its outcome back
//! as an [`ActionResult`]. Actions keep no state of their own.

use crate::fetch::{FetchClient, FetchError};
use crate::repository::ItemRepository;

/// Outcome of a single action.
pub type ActionResult = Result<(), FetchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the list with the first page.
    Reload,
    /// Append the next page.
    LoadNextPage,
    /// Replace the list with search results.
    Search(String),
    /// Pull-to-refresh: reload when the query is empty, search otherwise.
    Refresh(String),
}

/// Which action ran, independent of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Reload,
    LoadNextPage,
    Search,
    Refresh,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Reload => ActionKind::Reload,
            Action::LoadNextPage => ActionKind::LoadNextPage,
            Action::Search(_) => ActionKind::Search,
            Action::Refresh(_) => ActionKind::Refresh,
        }
    }

    /// Run the action against `repository`.
    ///
    /// Fetch failures come back as `Err`; they are logged here and go no
    /// further.
    pub async fn run<C: FetchClient>(&self, repository: &ItemRepository<C>) -> ActionResult {
        let kind = self.kind();
        tracing::debug!(action = ?kind, "Running action");

        let result = match self {
            Action::Reload => repository.reload().await,
            Action::LoadNextPage => repository.load_next_page().await,
            Action::Search(query) => repository.search(query).await,
            Action::Refresh(query) if query.is_empty() => repository.reload().await,
            Action::Refresh(query) => repository.search(query).await,
        };

        if let Err(e) = &result {
            tracing::warn!(
                action = ?kind,
                error_type = e.error_type(),
                error = %e,
                "Action failed"
            );
        }

        result
    }
}
