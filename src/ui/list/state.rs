use crate::actions::ActionKind;
use crate::fetch::FetchError;
use crate::item::{empty_list, Item, ItemList};
use crate::ui::mvi::UiState;

/// Which loading indicator an action drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingFlag {
    Loading,
    LoadingMore,
    Refreshing,
}

impl From<ActionKind> for LoadingFlag {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Reload | ActionKind::Search => LoadingFlag::Loading,
            ActionKind::LoadNextPage => LoadingFlag::LoadingMore,
            ActionKind::Refresh => LoadingFlag::Refreshing,
        }
    }
}

/// Render-ready snapshot of the list screen.
///
/// Flags are independent; several may be set at once.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    pub items: ItemList,
    pub is_loading: bool,
    pub is_loading_more: bool,
    pub is_refreshing: bool,
    pub error: Option<FetchError>,
    in_flight: InFlight,
}

/// Actions started but not yet finished, per flag. A flag stays set until
/// the last of its actions settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct InFlight {
    loading: u32,
    loading_more: u32,
    refreshing: u32,
}

impl InFlight {
    fn counter(&mut self, flag: LoadingFlag) -> &mut u32 {
        match flag {
            LoadingFlag::Loading => &mut self.loading,
            LoadingFlag::LoadingMore => &mut self.loading_more,
            LoadingFlag::Refreshing => &mut self.refreshing,
        }
    }
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            items: empty_list(),
            is_loading: false,
            is_loading_more: false,
            is_refreshing: false,
            error: None,
            in_flight: InFlight::default(),
        }
    }
}

impl UiState for ListViewState {}

impl ListViewState {
    /// Any indicator is showing.
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_loading_more || self.is_refreshing
    }

    /// Item for the detail view.
    pub fn item(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(super) fn begin(&mut self, flag: LoadingFlag) {
        *self.in_flight.counter(flag) += 1;
        self.sync_flag(flag);
    }

    pub(super) fn finish(&mut self, flag: LoadingFlag) {
        let counter = self.in_flight.counter(flag);
        *counter = counter.saturating_sub(1);
        self.sync_flag(flag);
    }

    fn sync_flag(&mut self, flag: LoadingFlag) {
        let active = *self.in_flight.counter(flag) > 0;
        match flag {
            LoadingFlag::Loading => self.is_loading = active,
            LoadingFlag::LoadingMore => self.is_loading_more = active,
            LoadingFlag::Refreshing => self.is_refreshing = active,
        }
    }
}
