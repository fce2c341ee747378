//! Lookahead line reader: a two-slot window over one line source.

use crate::error::DiffResult;
use crate::source::LineSource;

/// A two-slot lookahead window (`current`, `peeked`) over one source.
///
/// The window lets the engine see one line past the value currently being
/// compared, so after a mismatch it can tell whether the *other* source
/// has already run out without consuming a line that must still be judged.
///
/// End-of-source is modeled explicitly: an exhausted slot holds `None`,
/// never a sentinel value, so a genuine empty line (`Some("")`) is always
/// distinguishable from the end of the source. Reading past the end is
/// not an error; it empties the window and increments the exhaustion
/// depth instead.
pub struct LookaheadReader<S> {
    source: S,
    current: Option<String>,
    peeked: Option<String>,
    position: u64,
    exhaustion_depth: i64,
}

impl<S: LineSource> LookaheadReader<S> {
    /// Bind to a source and establish the initial window with two
    /// advances, leaving the source's first line in `current` and its
    /// second in `peeked`.
    pub async fn prime(source: S) -> DiffResult<Self> {
        let mut reader = Self {
            source,
            current: None,
            peeked: None,
            position: 0,
            exhaustion_depth: -1,
        };
        reader.advance().await?;
        reader.advance().await?;
        Ok(reader)
    }

    /// Shift `peeked` into `current`, then pull the next line from the
    /// source into `peeked`.
    ///
    /// If the source has already ended, `peeked` becomes `None` and the
    /// exhaustion depth increments by 1; the position increments either
    /// way. Returns the value promoted out of the window.
    pub async fn advance(&mut self) -> DiffResult<Option<String>> {
        let promoted = std::mem::replace(&mut self.current, self.peeked.take());
        match self.source.next_line().await? {
            Some(line) => self.peeked = Some(line),
            None => self.exhaustion_depth += 1,
        }
        self.position += 1;
        Ok(promoted)
    }

    /// The line currently under comparison, `None` once the window has
    /// drained past the end of the source.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The line `current` will take after the next advance.
    pub fn peeked(&self) -> Option<&str> {
        self.peeked.as_deref()
    }

    /// Count of advances performed so far. Informational.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// How many advances have been requested past the source's true end.
    /// −1 until the end is first observed, 0 at first observation, then
    /// +1 per further advance.
    pub fn exhaustion_depth(&self) -> i64 {
        self.exhaustion_depth
    }

    /// `current` as it participates in comparison: an exhausted slot
    /// compares as the empty string.
    pub(crate) fn current_or_empty(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }

    /// Snapshot of the window for observer notifications.
    pub fn state(&self) -> ReaderState<'_> {
        ReaderState {
            current: self.current(),
            peeked: self.peeked(),
            position: self.position,
            exhaustion_depth: self.exhaustion_depth,
        }
    }
}

/// Borrowed view of a reader's window, carried by every notification so
/// an observer can reconstruct full context without re-reading sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderState<'a> {
    /// The line under comparison this step, `None` once past the end.
    pub current: Option<&'a str>,
    /// The next line, one step ahead of `current`.
    pub peeked: Option<&'a str>,
    /// Count of advances performed so far.
    pub position: u64,
    /// Advances requested past the source's true end; −1 if never ended.
    pub exhaustion_depth: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BufferSource;

    #[tokio::test]
    async fn prime_fills_both_slots() {
        let reader = LookaheadReader::prime(BufferSource::new(["a", "b", "c"]))
            .await
            .unwrap();
        assert_eq!(reader.current(), Some("a"));
        assert_eq!(reader.peeked(), Some("b"));
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.exhaustion_depth(), -1);
    }

    #[tokio::test]
    async fn advance_returns_promoted_value() {
        let mut reader = LookaheadReader::prime(BufferSource::new(["a", "b", "c"]))
            .await
            .unwrap();
        let promoted = reader.advance().await.unwrap();
        assert_eq!(promoted, Some("a".into()));
        assert_eq!(reader.current(), Some("b"));
        assert_eq!(reader.peeked(), Some("c"));
    }

    #[tokio::test]
    async fn depth_counts_advances_past_the_end() {
        let mut reader = LookaheadReader::prime(BufferSource::new(["only"]))
            .await
            .unwrap();
        // "only" in current, end already observed once while peeking.
        assert_eq!(reader.current(), Some("only"));
        assert_eq!(reader.peeked(), None);
        assert_eq!(reader.exhaustion_depth(), 0);

        reader.advance().await.unwrap();
        assert_eq!(reader.current(), None);
        assert_eq!(reader.exhaustion_depth(), 1);

        reader.advance().await.unwrap();
        assert_eq!(reader.exhaustion_depth(), 2);
    }

    #[tokio::test]
    async fn empty_source_primes_to_an_empty_window() {
        let reader = LookaheadReader::prime(BufferSource::new(Vec::<String>::new()))
            .await
            .unwrap();
        assert_eq!(reader.current(), None);
        assert_eq!(reader.peeked(), None);
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.exhaustion_depth(), 1);
    }

    #[tokio::test]
    async fn reading_past_the_end_never_fails() {
        let mut reader = LookaheadReader::prime(BufferSource::new(Vec::<String>::new()))
            .await
            .unwrap();
        for expected_depth in 2..6 {
            let promoted = reader.advance().await.unwrap();
            assert_eq!(promoted, None);
            assert_eq!(reader.exhaustion_depth(), expected_depth);
        }
    }

    #[tokio::test]
    async fn empty_line_is_not_end_of_source() {
        let reader = LookaheadReader::prime(BufferSource::new(["", "x"]))
            .await
            .unwrap();
        assert_eq!(reader.current(), Some(""));
        assert_eq!(reader.peeked(), Some("x"));
        assert_eq!(reader.exhaustion_depth(), -1);
    }
}
