//! View-state layer: MVI primitives, the list reducer, and the view model
//! that publishes render-ready state.

pub mod list;
pub mod mvi;
pub mod view_model;

pub use view_model::ListViewModel;
