//! Intents for sort playback.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackIntent {
    /// Space pressed.
    TogglePause,

    /// One step was pulled from the sort.
    Stepped,

    /// The sort returned no further step.
    Exhausted,
}

impl Intent for PlaybackIntent {}
