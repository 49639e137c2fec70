// SPDX-License-Identifier: MPL-2.0
//! Gallery state store.
//!
//! Holds the four pieces of session state (query text, results, selection,
//! modal visibility). State is mutated only through the named entry points
//! below; views read it through shared references.

use crate::domain::gallery::ImageRecord;
use std::fmt;

/// Callback invoked after every `set_results`.
pub type ResultsHook = Box<dyn Fn(&[ImageRecord]) + Send + Sync>;

fn log_results(results: &[ImageRecord]) {
    tracing::debug!(count = results.len(), "gallery results updated");
}

pub struct GalleryState {
    query: String,
    results: Vec<ImageRecord>,
    selected: Option<ImageRecord>,
    modal_open: bool,
    on_results_changed: ResultsHook,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            selected: None,
            modal_open: false,
            on_results_changed: Box::new(log_results),
        }
    }
}

impl fmt::Debug for GalleryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryState")
            .field("query", &self.query)
            .field("results", &self.results.len())
            .field("selected", &self.selected.as_ref().map(|r| r.id))
            .field("modal_open", &self.modal_open)
            .finish()
    }
}

impl GalleryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the results-changed hook.
    #[must_use]
    pub fn with_results_hook(mut self, hook: ResultsHook) -> Self {
        self.on_results_changed = hook;
        self
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Replaces the whole result list, then notifies the hook.
    pub fn set_results(&mut self, results: Vec<ImageRecord>) {
        self.results = results;
        (self.on_results_changed)(&self.results);
    }

    pub fn select_image(&mut self, record: ImageRecord) {
        self.selected = Some(record);
    }

    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    /// Selects `record`, then opens the modal.
    pub fn open_detail(&mut self, record: ImageRecord) {
        self.select_image(record);
        self.set_modal_open(true);
    }

    /// Hides the modal. The selection is left as is.
    pub fn close_detail(&mut self) {
        self.set_modal_open(false);
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[ImageRecord] {
        &self.results
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ImageRecord> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// The record the detail modal should show, if it is visible.
    #[must_use]
    pub fn detail(&self) -> Option<&ImageRecord> {
        if self.modal_open {
            self.selected.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::fixtures::record;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn default_state_is_empty() {
        let state = GalleryState::new();
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert!(state.selected().is_none());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn set_results_replaces_list() {
        let mut state = GalleryState::new();
        state.set_results(vec![record(1), record(2)]);
        state.set_results(vec![record(3)]);

        let ids: Vec<u64> = state.results().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn set_results_notifies_hook_every_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let mut state = GalleryState::new().with_results_hook(Box::new(move |results| {
            seen.fetch_add(results.len() + 1, Ordering::SeqCst);
        }));

        state.set_results(vec![record(1), record(2)]);
        state.set_results(Vec::new());
        assert_eq!(calls.load(Ordering::SeqCst), 3 + 1);
    }

    #[test]
    fn open_detail_selects_then_opens() {
        let mut state = GalleryState::new();
        state.open_detail(record(4));
        assert!(state.is_modal_open());
        assert_eq!(state.selected().map(|r| r.id), Some(4));
        assert_eq!(state.detail().map(|r| r.id), Some(4));
    }

    #[test]
    fn open_detail_replaces_previous_selection() {
        let mut state = GalleryState::new();
        state.open_detail(record(1));
        state.open_detail(record(2));
        assert_eq!(state.selected().map(|r| r.id), Some(2));
    }

    #[test]
    fn close_detail_keeps_selection() {
        let mut state = GalleryState::new();
        state.open_detail(record(7));
        state.close_detail();

        assert!(!state.is_modal_open());
        assert_eq!(state.selected().map(|r| r.id), Some(7));
        assert!(state.detail().is_none());
    }

    #[test]
    fn set_query_accepts_any_text() {
        let mut state = GalleryState::new();
        state.set_query("  &?=  ");
        assert_eq!(state.query(), "  &?=  ");
    }

    #[test]
    fn modal_without_selection_has_no_detail() {
        let mut state = GalleryState::new();
        state.set_modal_open(true);
        assert!(state.detail().is_none());
    }
}
