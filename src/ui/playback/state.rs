//! State for sort playback.

use crate::ui::mvi::UiState;

/// Playback state machine, each variant carrying the steps shown so far.
///
/// Playing ⇄ Paused, either → Finished once the sort is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing { steps: u64 },
    Paused { steps: u64 },
    Finished { steps: u64 },
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Playing { steps: 0 }
    }
}

impl UiState for PlaybackState {}

impl PlaybackState {
    pub fn steps(&self) -> u64 {
        match *self {
            Self::Playing { steps } | Self::Paused { steps } | Self::Finished { steps } => steps,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Playing { .. } => "playing",
            Self::Paused { .. } => "paused",
            Self::Finished { .. } => "done",
        }
    }
}
