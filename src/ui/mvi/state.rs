//! Marker trait for UI state.

/// State consumed by the view.
///
/// Cloneable and comparable so a frame can tell whether anything changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
