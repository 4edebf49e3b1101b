//! Client-side synchronization core for a paginated, searchable recipe list.
//!
//! [`repository::ItemRepository`] owns the item cache, [`actions::Action`]
//! wraps its operations, and [`ui::ListViewModel`] reduces both into a
//! render-ready [`ui::list::ListViewState`] stream.

pub mod actions;
pub mod cancel;
pub mod config;
pub mod fetch;
pub mod item;
pub mod logging;
pub mod repository;
pub mod ui;
