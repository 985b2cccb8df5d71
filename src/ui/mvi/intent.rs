//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions or results coming back from background
/// work. Reducers turn them into new states.
pub trait Intent: Send + 'static {}
