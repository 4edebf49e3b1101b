mod intent;
mod reducer;
mod state;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{ListViewState, LoadingFlag};
