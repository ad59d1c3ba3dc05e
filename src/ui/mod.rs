//! Terminal playback of a sort.
//!
//! ```text
//! ┌ header: status │ title │ steps │ runtime │ speed ┐
//! │ body:   one bar per element                     │
//! └ footer: key hints, version                      ┘
//! ```

pub mod app;
pub mod bars;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod playback;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
