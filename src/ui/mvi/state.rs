//! Base trait for UI state.

/// Marker trait for UI state objects: cloneable, comparable snapshots that
/// hold everything a view needs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
