use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Extract, reflow, and search the text of PDF documents.
#[derive(Debug, Parser)]
#[command(name = "pdfscout", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reject PDFs larger than this many megabytes (default: 10)
    #[arg(long, value_name = "MB", global = true)]
    pub max_upload_mb: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the reflowed text of a PDF
    Text {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print page-marked text before reflow
        #[arg(long)]
        raw: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },

    /// Find every case-insensitive occurrence of a literal query
    Search {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text to search for (matched literally)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Match to mark as current, 1-based (default: 1)
        #[arg(long, value_name = "N")]
        index: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = SearchFormat::Text)]
        format: SearchFormat,

        /// Characters of context shown around each match
        #[arg(long, value_name = "N", default_value_t = 30)]
        context: usize,
    },

    /// Print word, character, line, and paragraph counts
    Stats {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },

    /// Save the reflowed text as <name>_extracted.txt
    Export {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory to write into (default: current directory)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Render a standalone printable HTML page
    Print {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Highlight matches of this query
        #[arg(long)]
        query: Option<String>,

        /// Match to mark as current, 1-based
        #[arg(long, value_name = "N", requires = "query")]
        index: Option<usize>,

        /// Write to this file instead of stdout
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Copy the reflowed text to the system clipboard
    Copy {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Browse and search a PDF interactively
    Browse {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Output format for text and stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextFormat {
    Text,
    Json,
}

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchFormat {
    Text,
    Json,
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_search_defaults() {
        let cli = Cli::try_parse_from(["pdfscout", "search", "a.pdf", "needle"]).unwrap();
        match cli.command {
            Commands::Search {
                query,
                index,
                format,
                context,
                ..
            } => {
                assert_eq!(query, "needle");
                assert_eq!(index, None);
                assert_eq!(format, SearchFormat::Text);
                assert_eq!(context, 30);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["pdfscout", "stats", "a.pdf", "-vv", "--max-upload-mb", "2"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.max_upload_mb, Some(2));
    }

    #[test]
    fn print_index_requires_query() {
        assert!(Cli::try_parse_from(["pdfscout", "print", "a.pdf", "--index", "2"]).is_err());
    }
}
