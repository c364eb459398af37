/// Marker trait for view state.
///
/// State is cloned rather than shared, compared to detect changes, and
/// has a `Default` so owners can `std::mem::take` it into a reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
