//! Shared test utilities: fixtures, in-memory fetch clients, wait helpers.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};

use recipe_sync::config::PagingConfig;
use recipe_sync::fetch::{FetchClient, FetchError};
use recipe_sync::item::Item;
use recipe_sync::repository::ItemRepository;
use recipe_sync::ui::list::ListViewState;

const WAIT_TIMEOUT: Duration = Duration::from_secs(2);

// -- Fixtures -----------------------------------------------------------------

pub fn recipe(id: u64, title: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        rating: 4.5,
        difficulty: "Easy".to_string(),
        tags: vec!["Dinner".to_string()],
        image_ref: format!("https://cdn.dummyjson.com/recipe-images/{}.webp", id),
        ingredients: None,
        instructions: None,
        prep_time_minutes: None,
    }
}

pub fn recipes(ids: std::ops::Range<u64>) -> Vec<Item> {
    ids.map(|id| recipe(id, &format!("Recipe {}", id))).collect()
}

pub fn pizza_search_result() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            title: "Classic Margherita Pizza".to_string(),
            rating: 4.6,
            difficulty: "Easy".to_string(),
            tags: vec!["Pizza".to_string(), "Italian".to_string()],
            image_ref: "https://cdn.dummyjson.com/recipe-images/1.webp".to_string(),
            ingredients: Some(vec![
                "Pizza dough".to_string(),
                "Tomato sauce".to_string(),
                "Fresh mozzarella cheese".to_string(),
                "Fresh basil leaves".to_string(),
            ]),
            instructions: Some(vec![
                "Preheat the oven to 475°F (245°C).".to_string(),
                "Bake for 12-15 minutes.".to_string(),
            ]),
            prep_time_minutes: Some(20),
        },
        Item {
            id: 45,
            title: "Italian Margherita Pizza".to_string(),
            rating: 4.7,
            difficulty: "Easy".to_string(),
            tags: vec![
                "Margherita pizza".to_string(),
                "Italian".to_string(),
                "Quick".to_string(),
            ],
            image_ref: "https://cdn.dummyjson.com/recipe-images/45.webp".to_string(),
            ingredients: None,
            instructions: None,
            prep_time_minutes: Some(20),
        },
    ]
}

pub fn ids(items: &[Item]) -> Vec<u64> {
    items.iter().map(|item| item.id).collect()
}

pub fn paging(initial: usize, incremental: usize) -> PagingConfig {
    PagingConfig {
        initial_page_size: initial,
        incremental_page_size: incremental,
    }
}

pub fn network_error() -> FetchError {
    FetchError::Network("connection reset".to_string())
}

// -- Scripted client ------------------------------------------------------------

/// A fetch the client received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Page { offset: usize, limit: usize },
    Search(String),
}

struct Step {
    result: Result<Vec<Item>, FetchError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Fetch client that replays queued results in call order.
///
/// Gated steps hold their response until the returned sender fires (or is
/// dropped). Calls with nothing queued succeed with an empty list.
#[derive(Default)]
pub struct ScriptedClient {
    pages: Mutex<VecDeque<Step>>,
    searches: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_page(&self, result: Result<Vec<Item>, FetchError>) {
        self.pages.lock().push_back(Step { result, gate: None });
    }

    pub fn push_gated_page(&self, result: Result<Vec<Item>, FetchError>) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.pages.lock().push_back(Step {
            result,
            gate: Some(gate),
        });
        release
    }

    pub fn push_search(&self, result: Result<Vec<Item>, FetchError>) {
        self.searches.lock().push_back(Step { result, gate: None });
    }

    pub fn push_gated_search(&self, result: Result<Vec<Item>, FetchError>) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.searches.lock().push_back(Step {
            result,
            gate: Some(gate),
        });
        release
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

async fn run_step(step: Option<Step>) -> Result<Vec<Item>, FetchError> {
    let Some(step) = step else {
        return Ok(Vec::new());
    };
    if let Some(gate) = step.gate {
        let _ = gate.await;
    }
    step.result
}

#[async_trait]
impl FetchClient for ScriptedClient {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Item>, FetchError> {
        self.calls.lock().push(Call::Page { offset, limit });
        let step = self.pages.lock().pop_front();
        run_step(step).await
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<Item>, FetchError> {
        self.calls.lock().push(Call::Search(query.to_string()));
        let step = self.searches.lock().pop_front();
        run_step(step).await
    }
}

// -- Catalog client -------------------------------------------------------------

/// Fetch client backed by a fixed catalog, like an unchanging backend.
///
/// Pages slice the catalog; searches match titles case-insensitively.
pub struct CatalogClient {
    catalog: Vec<Item>,
}

impl CatalogClient {
    pub fn new(catalog: Vec<Item>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl FetchClient for CatalogClient {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Item>, FetchError> {
        Ok(self.catalog.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<Item>, FetchError> {
        let needle = query.to_lowercase();
        Ok(self
            .catalog
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

pub fn scripted_repository(
    client: &Arc<ScriptedClient>,
    paging: PagingConfig,
) -> Arc<ItemRepository<Arc<ScriptedClient>>> {
    Arc::new(ItemRepository::new(Arc::clone(client), paging))
}

// -- Wait helpers ---------------------------------------------------------------

/// Poll until the client has seen at least `count` calls.
pub async fn wait_for_calls(client: &ScriptedClient, count: usize) {
    let start = Instant::now();
    while client.calls().len() < count {
        assert!(
            start.elapsed() < WAIT_TIMEOUT,
            "expected {} calls, saw {:?}",
            count,
            client.calls()
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Wait until the published view state satisfies `predicate`.
pub async fn wait_for_state<F>(
    state: &mut watch::Receiver<ListViewState>,
    predicate: F,
) -> ListViewState
where
    F: FnMut(&ListViewState) -> bool,
{
    tokio::time::timeout(WAIT_TIMEOUT, state.wait_for(predicate))
        .await
        .expect("timed out waiting for view state")
        .expect("view state channel closed")
        .clone()
}
