//! Streaming merge-join diff for sorted line-oriented text.
//!
//! Computes a line-level difference between two line sources that are
//! each sorted under a consistent order (sorted exports, sorted logs).
//! Rather than a minimal edit script over arbitrary input, this is a
//! sorted merge-join: one forward pass over both sources, classifying
//! each line as present only in A (removed), only in B (added), or in
//! both, without ever holding a source in memory beyond a two-line
//! lookahead window.
//!
//! # Key Types
//!
//! - [`DiffEngine`] / [`DiffOptions`] -- The merge loop and its per-run configuration
//! - [`LookaheadReader`] / [`ReaderState`] -- Two-slot lookahead window over one source
//! - [`LineSource`] -- Collaborator seam supplying lines ([`BufferSource`], [`LinesSource`])
//! - [`DiffObserver`] / [`DiffEvent`] / [`EventLog`] -- Push-style notification surface
//!
//! # Example
//!
//! ```
//! use sortdiff::{BufferSource, DiffEngine, EventLog};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let engine = DiffEngine::default();
//! let mut log = EventLog::new();
//! let summary = engine
//!     .diff_sources(
//!         BufferSource::new(["a", "b", "c"]),
//!         BufferSource::new(["a", "c", "d"]),
//!         &mut log,
//!     )
//!     .await
//!     .unwrap();
//! assert_eq!(log.removed(), vec!["b"]);
//! assert_eq!(log.added(), vec!["d"]);
//! assert_eq!(summary.compared, 4);
//! # });
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod options;
pub mod reader;
pub mod source;

pub use engine::{DiffEngine, DiffSummary};
pub use error::{DiffError, DiffResult};
pub use observer::{DiffEvent, DiffObserver, EventLog};
pub use options::{Comparator, DiffOptions};
pub use reader::{LookaheadReader, ReaderState};
pub use source::{BufferSource, LineSource, LinesSource};
