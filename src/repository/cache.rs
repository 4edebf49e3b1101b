//! The canonical item cache.
//!
//! A single `watch` cell holds the current list. Mutations are serialized
//! by an async mutex held across read-fetch-publish, so the pagination
//! offset is always read after every earlier mutation has settled and
//! lists publish in the order mutations were admitted.
//!
//! The guard also records where the cached list came from. Search results
//! are complete, so paging is only defined over the catalog.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{watch, Mutex};

use crate::config::PagingConfig;
use crate::fetch::{FetchClient, FetchError};
use crate::item::{append_page, dedup_list, empty_list, Item, ItemList};

/// Origin of the cached list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListSource {
    Catalog,
    Search,
}

/// Owns the authoritative item list and the client used to fill it.
pub struct ItemRepository<C> {
    client: C,
    paging: PagingConfig,
    items: watch::Sender<ItemList>,
    mutation: Mutex<ListSource>,
    reload_ticket: AtomicU64,
    search_ticket: AtomicU64,
}

impl<C: FetchClient> ItemRepository<C> {
    pub fn new(client: C, paging: PagingConfig) -> Self {
        let (items, _) = watch::channel(empty_list());
        Self {
            client,
            paging,
            items,
            mutation: Mutex::new(ListSource::Catalog),
            reload_ticket: AtomicU64::new(0),
            search_ticket: AtomicU64::new(0),
        }
    }

    /// Subscribe to the item stream.
    ///
    /// The receiver sees the current list immediately and is notified on
    /// every publish. It never closes while the repository is alive.
    pub fn subscribe(&self) -> watch::Receiver<ItemList> {
        self.items.subscribe()
    }

    /// Snapshot of the current list.
    pub fn current(&self) -> ItemList {
        self.items.borrow().clone()
    }

    /// Look up a cached item by id.
    pub fn find(&self, id: u64) -> Option<Item> {
        self.items.borrow().iter().find(|item| item.id == id).cloned()
    }

    pub fn paging(&self) -> PagingConfig {
        self.paging
    }

    /// Replace the cache with the first page.
    ///
    /// A result that arrives after a newer reload was issued is dropped and
    /// this returns `Ok(())` without publishing. If that newer reload is
    /// itself cancelled, neither call changes the cache.
    ///
    /// # Errors
    /// Returns the fetch failure. The cache is left untouched on error.
    pub async fn reload(&self) -> Result<(), FetchError> {
        let ticket = issue(&self.reload_ticket);
        let mut source = self.mutation.lock().await;

        let limit = self.paging.initial_page_size;
        tracing::debug!(offset = 0, limit, "Reloading items");
        let page = self.client.fetch_page(0, limit).await?;

        if superseded(&self.reload_ticket, ticket) {
            tracing::info!(ticket, "Discarding superseded reload result");
            return Ok(());
        }

        *source = ListSource::Catalog;
        self.publish(dedup_list(page));
        Ok(())
    }

    /// Append the page starting at the current cache length.
    ///
    /// Does nothing while the cache holds search results; a reload
    /// restores paging.
    ///
    /// # Errors
    /// Returns the fetch failure. The cache is left untouched on error.
    pub async fn load_next_page(&self) -> Result<(), FetchError> {
        let source = self.mutation.lock().await;
        if *source == ListSource::Search {
            tracing::debug!("Cache holds search results, not paging");
            return Ok(());
        }

        let offset = self.items.borrow().len();
        let limit = self.paging.incremental_page_size;
        tracing::debug!(offset, limit, "Loading next page");
        let page = self.client.fetch_page(offset, limit).await?;

        let merged = append_page(&self.items.borrow(), page);
        self.publish(merged);
        Ok(())
    }

    /// Replace the cache with the results of `query`.
    ///
    /// An empty query clears the cache without touching the network.
    ///
    /// # Errors
    /// Returns the fetch failure. Unlike reload, a failed search publishes
    /// an empty list before returning.
    pub async fn search(&self, query: &str) -> Result<(), FetchError> {
        let ticket = issue(&self.search_ticket);
        let mut source = self.mutation.lock().await;

        if query.is_empty() {
            if !superseded(&self.search_ticket, ticket) {
                tracing::debug!("Empty query, clearing items");
                *source = ListSource::Search;
                self.publish(empty_list());
            }
            return Ok(());
        }

        tracing::debug!(query, "Searching items");
        let result = self.client.fetch_search(query).await;

        if superseded(&self.search_ticket, ticket) {
            tracing::debug!(ticket, query, "Discarding superseded search result");
            return result.map(|_| ());
        }

        *source = ListSource::Search;
        match result {
            Ok(found) => {
                self.publish(dedup_list(found));
                Ok(())
            }
            Err(e) => {
                self.publish(empty_list());
                Err(e)
            }
        }
    }

    fn publish(&self, list: ItemList) {
        tracing::debug!(count = list.len(), "Publishing items");
        self.items.send_replace(list);
    }
}

fn issue(counter: &AtomicU64) -> u64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

/// A newer call of the same kind was issued after `ticket`.
fn superseded(counter: &AtomicU64, ticket: u64) -> bool {
    counter.load(Ordering::SeqCst) != ticket
}
