//! Marker trait for intents.

/// Something that asks a reducer to move state forward.
///
/// Covers both user gestures (a vote click) and system events
/// (a confirmation or rejection coming back from the server).
pub trait Intent: Send + 'static {}
