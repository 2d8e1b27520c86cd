//! Single-writer snapshot container.

use std::marker::PhantomData;

use super::reducer::Reducer;

/// Holds the current snapshot for reducer `R`.
///
/// All changes go through [`Store::dispatch`]. Readers borrow the snapshot
/// with [`Store::state`] and use [`Store::revision`] to tell whether anything
/// changed since they last looked.
pub struct Store<R: Reducer> {
    state: R::State,
    revision: u64,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            revision: 0,
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of dispatches that produced a different snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply `intent` and return whether the snapshot changed.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        tracing::debug!(?intent, revision = self.revision, "dispatch");
        let next = R::reduce(self.state.clone(), intent);
        if next == self.state {
            return false;
        }
        self.state = next;
        self.revision += 1;
        true
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
