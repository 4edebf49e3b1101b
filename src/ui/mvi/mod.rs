//! Model-View-Intent primitives for the list screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ display layer
//!    ↑                                  │
//!    └──────── actions, cache updates ──┘
//! ```
//!
//! The reducer is the only place view state changes. Side effects (fetching,
//! spawning tasks) stay in the view model around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
