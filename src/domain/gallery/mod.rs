// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

mod record;
mod tracker;

pub use record::ImageRecord;
pub use tracker::{ResultStatus, SearchOutcome, SearchSeq, SearchTicket, SearchTracker};

#[cfg(test)]
pub(crate) use record::fixtures;
