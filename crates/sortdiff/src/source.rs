//! Line sources: the collaborator seam that feeds the merge engine.
//!
//! A source is an ordered, one-directional supply of text lines with a
//! well-defined terminal signal. Line boundaries and character encoding
//! are resolved by the source before lines reach the engine; the engine
//! never re-interprets encoding.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::error::DiffResult;

/// Sequential supply of text lines.
///
/// `Ok(Some(line))` is a real line; `Ok(None)` is the terminal signal and
/// may be returned any number of times once reached. Failures obtaining a
/// line (I/O, decoding) are surfaced through the `Err` arm and abort the
/// run that consumed them.
#[async_trait]
pub trait LineSource: Send {
    async fn next_line(&mut self) -> DiffResult<Option<String>>;
}

/// In-memory line source, for tests and small pre-loaded inputs.
#[derive(Clone, Debug, Default)]
pub struct BufferSource {
    lines: VecDeque<String>,
}

impl BufferSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl LineSource for BufferSource {
    async fn next_line(&mut self) -> DiffResult<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Line source over any buffered async reader (files, sockets, pipes).
///
/// Uses [`tokio::io::AsyncBufReadExt::lines`], which strips both `\n` and
/// `\r\n` terminators, so CRLF and LF inputs compare identically.
pub struct LinesSource<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> LinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> LineSource for LinesSource<R> {
    async fn next_line(&mut self) -> DiffResult<Option<String>> {
        Ok(self.lines.next_line().await?)
    }
}
