use crate::actions::{ActionKind, ActionResult};
use crate::item::ItemList;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// The repository published a new list.
    ItemsChanged { items: ItemList },
    /// An action was dispatched.
    Started { kind: ActionKind },
    /// An action settled.
    Finished { kind: ActionKind, result: ActionResult },
    /// The user dismissed the error notice.
    ResetError,
}

impl Intent for ListIntent {}
