/// Marker for render-ready state snapshots.
///
/// Published by value; `PartialEq` lets the publisher skip no-op updates.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
