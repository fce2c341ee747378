use std::cmp::Ordering;

use anyhow::Result;
use colored::Colorize;
use sortdiff::{DiffEngine, DiffEvent, DiffObserver, DiffOptions, ReaderState};

use crate::cli::{Cli, OutputFormat};

/// Runs one diff and renders the output. Returns `true` when the inputs
/// were identical.
pub async fn run(cli: Cli) -> Result<bool> {
    let mut options = DiffOptions::new().skip_header(cli.skip_header);
    if cli.numeric {
        options = options.comparator(numeric_or_lexicographic);
    }
    let engine = DiffEngine::new(options);

    let summary = match cli.format {
        OutputFormat::Text => {
            let mut printer = TextPrinter { quiet: cli.quiet };
            let summary = engine
                .diff_files(&cli.file_a, &cli.file_b, &mut printer)
                .await?;
            println!(
                "{} added, {} removed, {} compared",
                summary.added, summary.removed, summary.compared
            );
            summary
        }
        OutputFormat::Json => {
            let mut printer = JsonPrinter::new(cli.quiet);
            let summary = engine
                .diff_files(&cli.file_a, &cli.file_b, &mut printer)
                .await?;
            printer.finish()?;
            println!(
                "{}",
                serde_json::json!({
                    "kind": "summary",
                    "added": summary.added,
                    "removed": summary.removed,
                    "compared": summary.compared,
                })
            );
            summary
        }
    };

    Ok(summary.is_identical())
}

/// Lines that both parse as integers compare numerically; anything else
/// falls back to lexicographic order.
fn numeric_or_lexicographic(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Streams classifications to stdout as the engine emits them.
struct TextPrinter {
    quiet: bool,
}

impl DiffObserver for TextPrinter {
    fn on_added(&mut self, line: &str, _reader_a: &ReaderState<'_>, _reader_b: &ReaderState<'_>) {
        if !self.quiet {
            println!("{} {}", "+".green(), line.green());
        }
    }

    fn on_removed(&mut self, line: &str, _reader_a: &ReaderState<'_>, _reader_b: &ReaderState<'_>) {
        if !self.quiet {
            println!("{} {}", "-".red(), line.red());
        }
    }
}

/// Streams classifications as one JSON record per line, as they arrive.
///
/// Observer hooks cannot propagate errors, so a serialization failure is
/// parked and surfaced by [`JsonPrinter::finish`] after the run.
struct JsonPrinter {
    quiet: bool,
    error: Option<serde_json::Error>,
}

impl JsonPrinter {
    fn new(quiet: bool) -> Self {
        Self { quiet, error: None }
    }

    fn emit(&mut self, event: DiffEvent) {
        if self.quiet || self.error.is_some() {
            return;
        }
        match serde_json::to_string(&event) {
            Ok(json) => println!("{json}"),
            Err(err) => self.error = Some(err),
        }
    }

    fn finish(self) -> Result<()> {
        match self.error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl DiffObserver for JsonPrinter {
    fn on_added(&mut self, line: &str, _reader_a: &ReaderState<'_>, _reader_b: &ReaderState<'_>) {
        self.emit(DiffEvent::Added {
            line: line.to_owned(),
        });
    }

    fn on_removed(&mut self, line: &str, _reader_a: &ReaderState<'_>, _reader_b: &ReaderState<'_>) {
        self.emit(DiffEvent::Removed {
            line: line.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use std::path::Path;

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::File::create(&path)
            .unwrap()
            .write_all(contents.as_bytes())
            .unwrap();
        path
    }

    #[test]
    fn numeric_comparator_orders_numbers() {
        assert_eq!(numeric_or_lexicographic("9", "10"), Ordering::Less);
        assert_eq!(numeric_or_lexicographic("10", "9"), Ordering::Greater);
        assert_eq!(numeric_or_lexicographic("7", "7"), Ordering::Equal);
    }

    #[test]
    fn numeric_comparator_falls_back_to_lexicographic() {
        assert_eq!(numeric_or_lexicographic("9", "apple"), Ordering::Greater);
        assert_eq!(numeric_or_lexicographic("apple", "banana"), Ordering::Less);
    }

    #[tokio::test]
    async fn run_reports_identical_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a", "x\ny\n");
        let b = write_file(dir.path(), "b", "x\ny\n");
        let cli = Cli::try_parse_from([
            "sortdiff",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--quiet",
        ])
        .unwrap();
        assert!(run(cli).await.unwrap());
    }

    #[tokio::test]
    async fn run_reports_differences() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a", "x\n");
        let b = write_file(dir.path(), "b", "x\ny\n");
        let cli = Cli::try_parse_from([
            "sortdiff",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--quiet",
        ])
        .unwrap();
        assert!(!run(cli).await.unwrap());
    }

    #[tokio::test]
    async fn run_fails_on_missing_file() {
        let cli = Cli::try_parse_from(["sortdiff", "/no/such/a", "/no/such/b"]).unwrap();
        assert!(run(cli).await.is_err());
    }

    #[test]
    fn json_printer_emits_per_event_and_finishes_clean() {
        let mut printer = JsonPrinter::new(false);
        printer.emit(DiffEvent::Added { line: "x".into() });
        printer.emit(DiffEvent::Removed { line: "y".into() });
        assert!(printer.finish().is_ok());
    }

    #[test]
    fn quiet_json_printer_suppresses_events() {
        let mut printer = JsonPrinter::new(true);
        printer.emit(DiffEvent::Added { line: "x".into() });
        assert!(printer.error.is_none());
        assert!(printer.finish().is_ok());
    }

    #[tokio::test]
    async fn run_json_format() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a", "x\n");
        let b = write_file(dir.path(), "b", "y\n");
        let cli = Cli::try_parse_from([
            "sortdiff",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--format",
            "json",
        ])
        .unwrap();
        assert!(!run(cli).await.unwrap());
    }
}
