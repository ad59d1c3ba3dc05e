//! Reducer for sort playback.

use crate::ui::mvi::Reducer;

use super::intent::PlaybackIntent;
use super::state::PlaybackState;

/// Pure playback transitions. Pulling steps from the sort happens in the
/// caller around the dispatch.
pub struct PlaybackReducer;

impl Reducer for PlaybackReducer {
    type State = PlaybackState;
    type Intent = PlaybackIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PlaybackIntent::TogglePause => match state {
                PlaybackState::Playing { steps } => PlaybackState::Paused { steps },
                PlaybackState::Paused { steps } => PlaybackState::Playing { steps },
                finished @ PlaybackState::Finished { .. } => finished,
            },

            PlaybackIntent::Stepped => match state {
                PlaybackState::Playing { steps } => PlaybackState::Playing { steps: steps + 1 },
                PlaybackState::Paused { steps } => PlaybackState::Paused { steps: steps + 1 },
                finished @ PlaybackState::Finished { .. } => finished,
            },

            PlaybackIntent::Exhausted => PlaybackState::Finished {
                steps: state.steps(),
            },
        }
    }
}
