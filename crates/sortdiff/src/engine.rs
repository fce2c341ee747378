//! Merge diff engine: single-pass merge-join over two sorted line sources.

use std::cmp::Ordering;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{debug, trace};

use crate::error::DiffResult;
use crate::observer::DiffObserver;
use crate::options::DiffOptions;
use crate::reader::LookaheadReader;
use crate::source::{LineSource, LinesSource};

/// Totals for one diff run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Comparison steps performed.
    pub compared: u64,
    /// Lines present only in source B.
    pub added: u64,
    /// Lines present only in source A.
    pub removed: u64,
}

impl DiffSummary {
    /// `true` if the run found no differences.
    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Single-pass merge-join diff over two sorted line sources.
///
/// The engine walks both sources in lockstep, classifying each encountered
/// line as present only in A (removed), only in B (added), or in both.
/// One forward pass, O(A+B) time, and no memory beyond each reader's
/// two-line window. Both sources must be sorted consistently under the
/// configured comparator; the engine does not verify this.
#[derive(Clone, Debug, Default)]
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// Diff two files line by line. Contents must be UTF-8.
    pub async fn diff_files(
        &self,
        path_a: impl AsRef<Path>,
        path_b: impl AsRef<Path>,
        observer: &mut dyn DiffObserver,
    ) -> DiffResult<DiffSummary> {
        let file_a = BufReader::new(File::open(path_a).await?);
        let file_b = BufReader::new(File::open(path_b).await?);
        self.diff_readers(file_a, file_b, observer).await
    }

    /// Diff two buffered async readers line by line.
    pub async fn diff_readers<A, B>(
        &self,
        reader_a: A,
        reader_b: B,
        observer: &mut dyn DiffObserver,
    ) -> DiffResult<DiffSummary>
    where
        A: AsyncBufRead + Unpin + Send,
        B: AsyncBufRead + Unpin + Send,
    {
        self.diff_sources(LinesSource::new(reader_a), LinesSource::new(reader_b), observer)
            .await
    }

    /// Diff two line sources. The core entry point.
    ///
    /// Notifications are pushed to `observer` in order as the pass
    /// proceeds; the returned summary carries the totals. The run
    /// terminates once both lookahead windows have drained past their
    /// sources' ends, which guarantees the last real line of the longer
    /// source is compared exactly once against the shorter, already
    /// exhausted side.
    pub async fn diff_sources<A, B>(
        &self,
        source_a: A,
        source_b: B,
        observer: &mut dyn DiffObserver,
    ) -> DiffResult<DiffSummary>
    where
        A: LineSource,
        B: LineSource,
    {
        let mut reader_a = LookaheadReader::prime(source_a).await?;
        let mut reader_b = LookaheadReader::prime(source_b).await?;

        if self.options.skips_header() {
            reader_a.advance().await?;
            reader_b.advance().await?;
        }

        let mut summary = DiffSummary::default();
        // Each step advances at least one reader, so the pass takes at
        // most len(A) + len(B) + 2 steps.
        while reader_a.current().is_some() || reader_b.current().is_some() {
            self.step(&mut reader_a, &mut reader_b, observer, &mut summary)
                .await?;
        }

        debug!(
            compared = summary.compared,
            added = summary.added,
            removed = summary.removed,
            "diff run complete"
        );
        Ok(summary)
    }

    /// One comparison step: judge both `current` lines, notify, advance.
    async fn step<A, B>(
        &self,
        reader_a: &mut LookaheadReader<A>,
        reader_b: &mut LookaheadReader<B>,
        observer: &mut dyn DiffObserver,
        summary: &mut DiffSummary,
    ) -> DiffResult<()>
    where
        A: LineSource,
        B: LineSource,
    {
        // The comparator only ever judges two real lines. Once a side is
        // exhausted the ordering is structural: an empty window sorts
        // before any remaining line on the other side.
        let order = match (reader_a.current(), reader_b.current()) {
            (Some(line_a), Some(line_b)) => self.options.compare(line_a, line_b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            // Ruled out by the run loop's guard.
            (None, None) => Ordering::Equal,
        };
        summary.compared += 1;
        trace!(
            line_a = reader_a.current_or_empty(),
            line_b = reader_b.current_or_empty(),
            ?order,
            "compared"
        );
        observer.on_compared(
            reader_a.current_or_empty(),
            reader_b.current_or_empty(),
            order,
            &reader_a.state(),
            &reader_b.state(),
        );

        if reader_a.current().is_none() {
            // A ended first: what remains of B exists only in B, however
            // the comparator ranks a line against an exhausted window.
            summary.added += 1;
            debug!(line = reader_b.current_or_empty(), "added");
            observer.on_added(
                reader_b.current_or_empty(),
                &reader_a.state(),
                &reader_b.state(),
            );
            reader_b.advance().await?;
        } else if reader_b.current().is_none() {
            // B ended first: the rest of A was removed relative to B.
            summary.removed += 1;
            debug!(line = reader_a.current_or_empty(), "removed");
            observer.on_removed(
                reader_a.current_or_empty(),
                &reader_a.state(),
                &reader_b.state(),
            );
            reader_a.advance().await?;
        } else {
            match order {
                // A's line sorts after B's: B has a line A does not.
                Ordering::Greater => {
                    summary.added += 1;
                    debug!(line = reader_b.current_or_empty(), "added");
                    observer.on_added(
                        reader_b.current_or_empty(),
                        &reader_a.state(),
                        &reader_b.state(),
                    );
                    reader_b.advance().await?;
                }
                // A's line sorts before B's: A has a line B does not.
                Ordering::Less => {
                    summary.removed += 1;
                    debug!(line = reader_a.current_or_empty(), "removed");
                    observer.on_removed(
                        reader_a.current_or_empty(),
                        &reader_a.state(),
                        &reader_b.state(),
                    );
                    reader_a.advance().await?;
                }
                // Lines match: no classification, move both sides on.
                Ordering::Equal => {
                    reader_a.advance().await?;
                    reader_b.advance().await?;
                }
            }
        }
        Ok(())
    }
}
