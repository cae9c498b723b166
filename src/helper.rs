//! Mutable search-state holder shared between the embedder and the widgets.
//!
//! The helper owns the [`SearchParameters`] a connector refines and records
//! search requests without issuing them; actually querying the service and
//! delivering [`SearchResults`](crate::state::SearchResults) back through
//! `render` is the embedding runtime's job. Everything here is
//! single-threaded: widgets run inside a callback-driven event loop, so the
//! shared handle is `Rc<RefCell<_>>` rather than anything locking.

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::SearchParameters;

/// Owns the live request state plus a counter of requested searches.
#[derive(Debug, Clone, Default)]
pub struct Helper {
    state: SearchParameters,
    search_requests: u64,
}

impl Helper {
    pub fn new(state: SearchParameters) -> Self {
        Self {
            state,
            search_requests: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SearchParameters {
        &self.state
    }

    pub fn replace_state(&mut self, state: SearchParameters) {
        self.state = state;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Sets or clears the page-size parameter. `None` removes it from the
    /// request entirely; the request representation has no way to carry an
    /// empty value that is distinct from absent.
    pub fn set_page_size(&mut self, hits_per_page: Option<u64>) {
        self.state.hits_per_page = hits_per_page;
    }

    /// Records a search request against the current state. Fire and forget:
    /// the runtime watches this and performs the actual query.
    pub fn search(&mut self) {
        self.search_requests += 1;
    }

    #[must_use]
    pub fn search_requests(&self) -> u64 {
        self.search_requests
    }
}

/// Cheaply clonable handle to a [`Helper`] shared across widgets and refine
/// handles within one event loop.
#[derive(Debug, Clone)]
pub struct SharedHelper {
    inner: Rc<RefCell<Helper>>,
}

impl SharedHelper {
    pub fn new(state: SearchParameters) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Helper::new(state))),
        }
    }

    /// A copy of the current request state.
    #[must_use]
    pub fn snapshot(&self) -> SearchParameters {
        self.inner.borrow().state().clone()
    }

    pub fn read<T>(&self, f: impl FnOnce(&Helper) -> T) -> T {
        f(&self.inner.borrow())
    }

    pub fn update<T>(&self, f: impl FnOnce(&mut Helper) -> T) -> T {
        f(&mut self.inner.borrow_mut())
    }

    #[must_use]
    pub fn search_requests(&self) -> u64 {
        self.read(Helper::search_requests)
    }
}
