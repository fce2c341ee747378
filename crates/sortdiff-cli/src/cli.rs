use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sortdiff",
    about = "Line-level diff for text files sorted in a consistent order",
    version,
)]
pub struct Cli {
    /// Left-hand ("old") file.
    pub file_a: PathBuf,

    /// Right-hand ("new") file.
    pub file_b: PathBuf,

    /// Discard the first line of each file before comparing.
    #[arg(long)]
    pub skip_header: bool,

    /// Compare lines numerically when both parse as integers,
    /// lexicographically otherwise.
    #[arg(long)]
    pub numeric: bool,

    /// Print the summary only.
    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_files() {
        let cli = Cli::try_parse_from(["sortdiff", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.file_a, PathBuf::from("a.txt"));
        assert_eq!(cli.file_b, PathBuf::from("b.txt"));
        assert!(!cli.skip_header);
        assert!(!cli.numeric);
    }

    #[test]
    fn parse_requires_both_files() {
        assert!(Cli::try_parse_from(["sortdiff", "only.txt"]).is_err());
    }

    #[test]
    fn parse_skip_header() {
        let cli = Cli::try_parse_from(["sortdiff", "--skip-header", "a", "b"]).unwrap();
        assert!(cli.skip_header);
    }

    #[test]
    fn parse_numeric_and_quiet() {
        let cli = Cli::try_parse_from(["sortdiff", "--numeric", "-q", "a", "b"]).unwrap();
        assert!(cli.numeric);
        assert!(cli.quiet);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["sortdiff", "--format", "json", "a", "b"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["sortdiff", "-v", "a", "b"]).unwrap();
        assert!(cli.verbose);
    }
}
