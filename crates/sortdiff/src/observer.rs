//! Observer surface: push-style notifications emitted during a run.
//!
//! Observers receive every notification synchronously and in emission
//! order, between engine steps. For callers that prefer pulling a
//! sequence of tagged records instead of implementing hooks, [`EventLog`]
//! records every notification as a [`DiffEvent`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::reader::ReaderState;

/// Receives notifications from a diff run.
///
/// All hooks default to no-ops, so an observer implements only the
/// notifications it cares about. Reader states are passed for both sides
/// on every call. For a one-sided step the exhausted side's compared line
/// value is the empty string while its state shows `current: None`, and
/// the reported order is structural (the exhausted side sorts first)
/// rather than a comparator verdict.
pub trait DiffObserver {
    /// One comparison step was performed, with the comparator's verdict.
    fn on_compared(
        &mut self,
        line_a: &str,
        line_b: &str,
        order: Ordering,
        reader_a: &ReaderState<'_>,
        reader_b: &ReaderState<'_>,
    ) {
        let _ = (line_a, line_b, order, reader_a, reader_b);
    }

    /// `line` exists only in source B.
    fn on_added(&mut self, line: &str, reader_a: &ReaderState<'_>, reader_b: &ReaderState<'_>) {
        let _ = (line, reader_a, reader_b);
    }

    /// `line` exists only in source A.
    fn on_removed(&mut self, line: &str, reader_a: &ReaderState<'_>, reader_b: &ReaderState<'_>) {
        let _ = (line, reader_a, reader_b);
    }
}

/// No-op observer for callers that only want the run summary.
impl DiffObserver for () {}

/// A single tagged outcome record.
///
/// `order` is the comparator sign: −1, 0, or +1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffEvent {
    Compared {
        line_a: String,
        line_b: String,
        order: i8,
    },
    Added {
        line: String,
    },
    Removed {
        line: String,
    },
}

/// Observer that records every notification as a [`DiffEvent`].
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<DiffEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in emission order.
    pub fn events(&self) -> &[DiffEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<DiffEvent> {
        self.events
    }

    /// Lines reported as existing only in source B, in order.
    pub fn added(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DiffEvent::Added { line } => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Lines reported as existing only in source A, in order.
    pub fn removed(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DiffEvent::Removed { line } => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DiffObserver for EventLog {
    fn on_compared(
        &mut self,
        line_a: &str,
        line_b: &str,
        order: Ordering,
        _reader_a: &ReaderState<'_>,
        _reader_b: &ReaderState<'_>,
    ) {
        self.events.push(DiffEvent::Compared {
            line_a: line_a.to_owned(),
            line_b: line_b.to_owned(),
            order: order as i8,
        });
    }

    fn on_added(&mut self, line: &str, _reader_a: &ReaderState<'_>, _reader_b: &ReaderState<'_>) {
        self.events.push(DiffEvent::Added {
            line: line.to_owned(),
        });
    }

    fn on_removed(&mut self, line: &str, _reader_a: &ReaderState<'_>, _reader_b: &ReaderState<'_>) {
        self.events.push(DiffEvent::Removed {
            line: line.to_owned(),
        });
    }
}
