//! Per-run configuration for the merge engine.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Total order over lines, comparing a line from source A against a line
/// from source B.
pub type Comparator = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Immutable per-run configuration.
///
/// Built once with the builder methods and handed to the engine by value;
/// no option state is shared or mutated between runs.
#[derive(Clone)]
pub struct DiffOptions {
    skip_header: bool,
    comparator: Comparator,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard one line from each source before the first comparison,
    /// without validating that the discarded lines match.
    pub fn skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// Replace the default lexicographic order. Both sources must be
    /// sorted consistently under the supplied order.
    pub fn comparator<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Arc::new(cmp);
        self
    }

    pub(crate) fn skips_header(&self) -> bool {
        self.skip_header
    }

    pub(crate) fn compare(&self, line_a: &str, line_b: &str) -> Ordering {
        (self.comparator)(line_a, line_b)
    }
}

fn lexicographic(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            skip_header: false,
            comparator: Arc::new(lexicographic),
        }
    }
}

impl fmt::Debug for DiffOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffOptions")
            .field("skip_header", &self.skip_header)
            .finish_non_exhaustive()
    }
}
