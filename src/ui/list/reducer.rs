use crate::ui::mvi::Reducer;

use super::intent::ListIntent;
use super::state::{ListViewState, LoadingFlag};

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListViewState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::ItemsChanged { items } => {
                state.items = items;
                state
            }
            ListIntent::Started { kind } => {
                state.begin(LoadingFlag::from(kind));
                state
            }
            ListIntent::Finished { kind, result } => {
                state.finish(LoadingFlag::from(kind));
                // The latest outcome owns the notice: success clears it.
                state.error = result.err();
                state
            }
            ListIntent::ResetError => {
                state.error = None;
                state
            }
        }
    }
}
