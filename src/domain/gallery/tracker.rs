// SPDX-License-Identifier: MPL-2.0
//! Search sequencing.
//!
//! Searches may overlap. Every search receives a sequence number when it is
//! issued, and a completion is applied only if its number is greater than
//! that of every search completed before it. Failures count as completions,
//! so an older success arriving after a newer failure is still discarded.

use std::collections::BTreeSet;

/// Monotonic search sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchSeq(u64);

impl SearchSeq {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Handle for one issued search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: SearchSeq,
    pub query: String,
}

/// Coarse status of the result list, used for the placeholder caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultStatus {
    /// No search has been applied yet.
    #[default]
    NotLoaded,
    /// A search that would still be applied is in flight.
    Loading,
    /// The latest applied search returned no records.
    LoadedEmpty,
    /// The latest applied search returned records.
    Loaded,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Succeeded { result_count: usize },
    Failed,
}

#[derive(Debug, Default)]
pub struct SearchTracker {
    next_seq: u64,
    in_flight: BTreeSet<SearchSeq>,
    latest_completed: Option<SearchSeq>,
    applied_count: Option<usize>,
    issued_total: u64,
}

impl SearchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new search and returns its ticket.
    pub fn issue(&mut self, query: impl Into<String>) -> SearchTicket {
        self.next_seq += 1;
        self.issued_total += 1;
        let seq = SearchSeq(self.next_seq);
        self.in_flight.insert(seq);
        SearchTicket {
            seq,
            query: query.into(),
        }
    }

    /// Records the end of a search.
    ///
    /// Returns `true` when the completion is fresh. Only a fresh success may be
    /// written to the gallery state.
    pub fn complete(&mut self, seq: SearchSeq, outcome: SearchOutcome) -> bool {
        self.in_flight.remove(&seq);

        if self.latest_completed.is_some_and(|latest| seq <= latest) {
            return false;
        }
        self.latest_completed = Some(seq);

        if let SearchOutcome::Succeeded { result_count } = outcome {
            self.applied_count = Some(result_count);
        }
        true
    }

    /// Whether `seq` would still be applied if it completed now.
    #[must_use]
    pub fn is_current(&self, seq: SearchSeq) -> bool {
        self.latest_completed.is_none_or(|latest| seq > latest)
    }

    #[must_use]
    pub fn status(&self) -> ResultStatus {
        if self.in_flight.iter().any(|seq| self.is_current(*seq)) {
            return ResultStatus::Loading;
        }
        match self.applied_count {
            None => ResultStatus::NotLoaded,
            Some(0) => ResultStatus::LoadedEmpty,
            Some(_) => ResultStatus::Loaded,
        }
    }

    /// Number of searches issued since start-up.
    #[must_use]
    pub fn issued_total(&self) -> u64 {
        self.issued_total
    }

    /// Sequence number of the most recently issued search.
    #[must_use]
    pub fn latest_issued(&self) -> Option<SearchSeq> {
        (self.next_seq > 0).then_some(SearchSeq(self.next_seq))
    }

    /// Number of searches still awaiting completion.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(n: usize) -> SearchOutcome {
        SearchOutcome::Succeeded { result_count: n }
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut tracker = SearchTracker::new();
        let a = tracker.issue("a");
        let b = tracker.issue("b");
        assert!(b.seq > a.seq);
        assert_eq!(tracker.issued_total(), 2);
        assert_eq!(tracker.latest_issued(), Some(b.seq));
        assert_eq!(b.query, "b");
    }

    #[test]
    fn in_order_completions_are_applied() {
        let mut tracker = SearchTracker::new();
        let a = tracker.issue("a");
        assert!(tracker.complete(a.seq, ok(3)));
        let b = tracker.issue("b");
        assert!(tracker.complete(b.seq, ok(1)));
    }

    #[test]
    fn older_completion_after_newer_is_discarded() {
        let mut tracker = SearchTracker::new();
        let old = tracker.issue("dogs");
        let new = tracker.issue("cats");

        assert!(tracker.complete(new.seq, ok(2)));
        assert!(!tracker.complete(old.seq, ok(5)));
        assert_eq!(tracker.status(), ResultStatus::Loaded);
    }

    #[test]
    fn newer_failure_blocks_older_success() {
        let mut tracker = SearchTracker::new();
        let old = tracker.issue("dogs");
        let new = tracker.issue("cats");

        assert!(tracker.complete(new.seq, SearchOutcome::Failed));
        assert!(!tracker.complete(old.seq, ok(5)));
    }

    #[test]
    fn older_completion_before_newer_is_applied() {
        let mut tracker = SearchTracker::new();
        let old = tracker.issue("dogs");
        let new = tracker.issue("cats");

        assert!(tracker.complete(old.seq, ok(5)));
        assert!(tracker.complete(new.seq, ok(0)));
        assert_eq!(tracker.status(), ResultStatus::LoadedEmpty);
    }

    #[test]
    fn status_transitions() {
        let mut tracker = SearchTracker::new();
        assert_eq!(tracker.status(), ResultStatus::NotLoaded);
        assert_eq!(tracker.latest_issued(), None);

        let first = tracker.issue("");
        assert_eq!(tracker.status(), ResultStatus::Loading);

        tracker.complete(first.seq, ok(0));
        assert_eq!(tracker.status(), ResultStatus::LoadedEmpty);

        let second = tracker.issue("cats");
        assert_eq!(tracker.status(), ResultStatus::Loading);
        tracker.complete(second.seq, ok(4));
        assert_eq!(tracker.status(), ResultStatus::Loaded);
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn failure_keeps_previous_status() {
        let mut tracker = SearchTracker::new();
        let first = tracker.issue("");
        tracker.complete(first.seq, ok(2));

        let second = tracker.issue("x");
        tracker.complete(second.seq, SearchOutcome::Failed);
        assert_eq!(tracker.status(), ResultStatus::Loaded);
    }

    #[test]
    fn superseded_search_in_flight_is_not_loading() {
        let mut tracker = SearchTracker::new();
        let old = tracker.issue("old");
        let new = tracker.issue("new");
        tracker.complete(new.seq, ok(1));

        assert!(!tracker.is_current(old.seq));
        assert_eq!(tracker.in_flight(), 1);
        assert_eq!(tracker.status(), ResultStatus::Loaded);
    }
}
