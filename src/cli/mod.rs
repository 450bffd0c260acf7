//! CLI argument parsing for xpmatch.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the argument surface; the run itself is in the
//! `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Extract values from XML documents with XPath.
///
/// Two modes:
/// - grep mode (`-x`): every value one expression selects, one line each
/// - table mode (`-t` or `-c`): one column per expression, one row per
///   document or per context node (`-i`)
///
/// Documents are named as arguments, listed in a file (`-l`), or listed on
/// standard input. With `-r` standard input holds a single document instead.
#[derive(Parser, Debug)]
#[command(name = "xpmatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // =========================================================================
    // Table mode
    // =========================================================================
    /// Column-spec file: one `title xpath` (or bare `xpath`) per line.
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["column", "xpath"], help_heading = "Table mode")]
    pub table: Option<PathBuf>,

    /// Inline column spec, same syntax as a spec file line (repeatable).
    #[arg(short, long, value_name = "SPEC", conflicts_with = "xpath", help_heading = "Table mode")]
    pub column: Vec<String>,

    /// Context xpath: one row per node it selects.
    #[arg(short, long, value_name = "XPATH", help_heading = "Table mode")]
    pub initial: Option<String>,

    // =========================================================================
    // Grep mode
    // =========================================================================
    /// XPath pattern.
    #[arg(short = 'x', long, value_name = "XPATH", help_heading = "Grep mode")]
    pub xpath: Option<String>,

    /// Include a line for documents without a match.
    #[arg(short, long, help_heading = "Grep mode")]
    pub blanks: bool,

    /// Only print the lines for documents without a match.
    #[arg(short, long, requires = "blanks", help_heading = "Grep mode")]
    pub only: bool,

    // =========================================================================
    // Sources
    // =========================================================================
    /// File listing one document name per line.
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["files", "readxml"], help_heading = "Sources")]
    pub listfile: Option<PathBuf>,

    /// Directory prepended to document names.
    #[arg(short, long, value_name = "DIR", help_heading = "Sources")]
    pub directory: Option<String>,

    /// Suffix appended to document names.
    #[arg(long, value_name = "SUFFIX", help_heading = "Sources")]
    pub suffix: Option<String>,

    /// Read one document's content from standard input.
    #[arg(short, long, conflicts_with = "files", help_heading = "Sources")]
    pub readxml: bool,

    /// Document names. Without any, names are read from standard input.
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Suppress the header row (table mode) or the name prefix (grep mode).
    #[arg(short, long, help_heading = "Output")]
    pub noheader: bool,

    /// CSV output with every cell quoted (table mode).
    #[arg(short, long, conflicts_with = "separator", help_heading = "Output")]
    pub quoted: bool,

    /// Cell delimiter (table mode, default TAB).
    #[arg(short, long, value_name = "SEP", help_heading = "Output")]
    pub separator: Option<String>,

    // =========================================================================
    // General
    // =========================================================================
    /// YAML configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug tracing on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Errors include `--help` and `--version`, which clap reports as
    /// errors that print to stdout.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }

    /// Whether a table-mode column source was given.
    pub fn is_table_mode(&self) -> bool {
        self.table.is_some() || !self.column.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_debug_assert() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_grep_mode() {
        let cli = Cli::try_parse_from(["xpmatch", "-x", "/root/item", "-b", "a.xml", "b.xml"]).unwrap();
        assert_eq!(cli.xpath.as_deref(), Some("/root/item"));
        assert!(cli.blanks);
        assert!(!cli.only);
        assert_eq!(cli.files, vec!["a.xml", "b.xml"]);
        assert!(!cli.is_table_mode());
    }

    #[test]
    fn parse_table_file_mode() {
        let cli = Cli::try_parse_from([
            "xpmatch",
            "--table",
            "cols.txt",
            "--initial",
            "/orders/order",
            "--separator",
            ",",
            "--noheader",
        ])
        .unwrap();
        assert_eq!(cli.table, Some(PathBuf::from("cols.txt")));
        assert_eq!(cli.initial.as_deref(), Some("/orders/order"));
        assert_eq!(cli.separator.as_deref(), Some(","));
        assert!(cli.noheader);
        assert!(cli.is_table_mode());
        assert!(cli.files.is_empty());
    }

    #[test]
    fn parse_repeated_columns() {
        let cli = Cli::try_parse_from([
            "xpmatch",
            "-c",
            "Id /r/@id",
            "-c",
            "/r/name",
            "-q",
            "-r",
        ])
        .unwrap();
        assert_eq!(cli.column, vec!["Id /r/@id", "/r/name"]);
        assert!(cli.quoted);
        assert!(cli.readxml);
        assert!(cli.is_table_mode());
    }

    #[test]
    fn parse_sources() {
        let cli = Cli::try_parse_from([
            "xpmatch",
            "-x",
            "//a",
            "-l",
            "list.txt",
            "-d",
            "data",
            "--suffix",
            ".xml",
            "--config",
            "xpmatch.yaml",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.listfile, Some(PathBuf::from("list.txt")));
        assert_eq!(cli.directory.as_deref(), Some("data"));
        assert_eq!(cli.suffix.as_deref(), Some(".xml"));
        assert_eq!(cli.config, Some(PathBuf::from("xpmatch.yaml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_nothing_is_allowed() {
        // Rejected later as "nothing to do", with a proper message.
        let cli = Cli::try_parse_from(["xpmatch"]).unwrap();
        assert!(cli.xpath.is_none());
        assert!(!cli.is_table_mode());
    }

    #[test]
    fn table_conflicts_with_column() {
        let err = Cli::try_parse_from(["xpmatch", "-t", "cols.txt", "-c", "/a"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn xpath_conflicts_with_table_modes() {
        let err = Cli::try_parse_from(["xpmatch", "-x", "//a", "-t", "cols.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = Cli::try_parse_from(["xpmatch", "-x", "//a", "-c", "/a"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn listfile_conflicts_with_other_sources() {
        let err = Cli::try_parse_from(["xpmatch", "-x", "//a", "-l", "list.txt", "a.xml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = Cli::try_parse_from(["xpmatch", "-x", "//a", "-l", "list.txt", "-r"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn readxml_conflicts_with_files() {
        let err = Cli::try_parse_from(["xpmatch", "-x", "//a", "-r", "a.xml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn quoted_conflicts_with_separator() {
        let err = Cli::try_parse_from(["xpmatch", "-c", "/a", "-q", "-s", ";"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn only_requires_blanks() {
        let err = Cli::try_parse_from(["xpmatch", "-x", "//a", "-o"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["xpmatch", "-x", "//a", "-b", "-o"]).unwrap();
        assert!(cli.only);
    }
}
