//! Playback feature module.
//!
//! Tracks whether the animation is running, paused or done, and how many
//! steps have been drawn.
//!
//! - `state.rs` - Playing / Paused / Finished
//! - `intent.rs` - TogglePause, Stepped, Exhausted
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::PlaybackIntent;
pub use reducer::PlaybackReducer;
pub use state::PlaybackState;
