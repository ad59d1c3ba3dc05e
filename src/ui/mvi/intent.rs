//! Marker trait for intents.

/// Something that happened: a user key or a playback event.
///
/// Intents carry no behavior; reducers interpret them.
pub trait Intent: Send + 'static {}
