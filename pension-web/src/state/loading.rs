//! Loading indicator state
//!
//! Any component can mark work as in flight; the indicator in the shell is
//! visible while at least one piece of work is pending.

use leptos::prelude::*;

/// Number of operations currently in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingCounter {
    pending: usize,
}

impl LoadingCounter {
    pub fn begin(&mut self) {
        self.pending += 1;
    }

    /// Mark one operation as done. Extra calls are ignored.
    pub fn finish(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }
}

#[derive(Clone, Copy)]
pub struct LoadingContext {
    counter: RwSignal<LoadingCounter>,
}

impl LoadingContext {
    pub fn new() -> Self {
        Self {
            counter: RwSignal::new(LoadingCounter::default()),
        }
    }

    pub fn begin(&self) {
        self.counter.update(LoadingCounter::begin);
    }

    pub fn finish(&self) {
        self.counter.update(LoadingCounter::finish);
    }

    pub fn is_loading(&self) -> bool {
        self.counter.with(LoadingCounter::is_loading)
    }
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_loading_context() -> LoadingContext {
    let context = LoadingContext::new();
    provide_context(context);
    context
}

pub fn use_loading_context() -> LoadingContext {
    expect_context::<LoadingContext>()
}
