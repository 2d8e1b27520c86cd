//! Marker trait for intents.

use std::fmt::Debug;

/// A user action routed into a reducer.
///
/// `Debug` is required so the store can log every dispatched intent.
pub trait Intent: Debug + Send + 'static {}
