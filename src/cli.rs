use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated bird list, e.g. "Blue Jay (Cyanocitta cristata), Wren".
    /// Read from stdin when omitted.
    #[arg(value_name = "TEXT", conflicts_with = "input_file")]
    pub text: Option<String>,

    /// Read the bird list from a file.
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Write the result to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Copy the HTML document to the system clipboard.
    ///
    /// On Linux the clipboard is served by this process, so birdsort stays running
    /// until another application takes the clipboard or `--copy-wait` expires.
    #[arg(short, long)]
    pub copy: bool,

    /// Seconds to keep serving the clipboard on Linux after `--copy`.
    #[arg(long, value_name = "SECS", default_value_t = 60, requires = "copy")]
    pub copy_wait: u64,

    /// Print entry count and longest names to stderr.
    #[arg(short, long)]
    pub stats: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Minimal HTML document with italic scientific names.
    #[value(name = "html")]
    Html,
    /// JSON array of parsed entries.
    #[value(name = "json")]
    Json,
    /// Tab-separated table of parsed entries.
    #[value(name = "tsv")]
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_positional_text() {
        let cli = Cli::parse_from(["birdsort", "Owl, Wren (Troglodytes)"]);
        assert_eq!(cli.text.as_deref(), Some("Owl, Wren (Troglodytes)"));
        assert!(cli.input_file.is_none());
        assert_eq!(cli.format, OutputFormat::Html);
        assert!(!cli.copy);
        assert!(!cli.stats);
    }

    #[test]
    fn test_cli_file_to_file_json() {
        let cli = Cli::parse_from([
            "birdsort", "-i", "birds.txt", "-o", "birds.json", "-f", "json", "--stats",
        ]);
        assert_eq!(cli.input_file, Some(PathBuf::from("birds.txt")));
        assert_eq!(cli.output_file, Some(PathBuf::from("birds.json")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.stats);
    }

    #[test]
    fn test_cli_stdin_with_copy() {
        let cli = Cli::parse_from(["birdsort", "--copy", "-q", "-f", "tsv"]);
        assert!(cli.text.is_none());
        assert!(cli.input_file.is_none());
        assert!(cli.copy);
        assert_eq!(cli.copy_wait, 60);
        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Tsv);
    }

    #[test]
    fn test_cli_text_conflicts_with_input_file() {
        let result = Cli::try_parse_from(["birdsort", "Owl", "-i", "birds.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_copy_wait() {
        let cli = Cli::parse_from(["birdsort", "Owl", "--copy", "--copy-wait", "5"]);
        assert_eq!(cli.copy_wait, 5);
        assert!(Cli::try_parse_from(["birdsort", "Owl", "--copy-wait", "5"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["birdsort", "-f", "pdf"]).is_err());
    }
}
