//! Model-View-Intent primitives for the playback UI.
//!
//! ```text
//! key / tick ──→ Intent ──→ Reducer ──→ State ──→ header, bars
//!      ↑                                             │
//!      └─────────────────────────────────────────────┘
//! ```
//!
//! - **State**: what the view needs to draw one frame
//! - **Intent**: a key press or a step pulled from the sort
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
