/// Marker trait for snapshot types.
///
/// Snapshots are cloned rather than mutated, compared to detect changes,
/// and must have an empty starting value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
