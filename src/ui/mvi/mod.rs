//! Model-View-Intent (MVI) primitives for the shopping list screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything the screen renders
//! - **Intent**: a user action to apply to the snapshot
//! - **Reducer**: pure function `(State, Intent) -> State`
//! - **Store**: owns the current snapshot and is the only writer

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
