/// Marker for events fed to a reducer: action starts and completions,
/// cache emissions, and explicit user acknowledgements.
pub trait Intent: Send + 'static {}
