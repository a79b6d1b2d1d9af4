use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for dev builds.
/// Format: "0.4.2" for releases, "0.4.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "publist", bin_name = "publist", version = get_version())]
#[command(about = "Filterable publication lists for personal academic sites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the publication data file (overrides config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Path to a config file (default: ./publist.json, then the user config dir)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the publications visible under the given labels
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Authorship labels to select (no flags = everything visible)
        #[arg(long, value_name = "LABEL", num_args = 1..)]
        authorship: Vec<String>,

        /// Area labels to select
        #[arg(long, value_name = "LABEL", num_args = 1..)]
        area: Vec<String>,

        /// Venue labels to select
        #[arg(long, value_name = "LABEL", num_args = 1..)]
        venue: Vec<String>,
    },

    /// Emit HTML for the visible publications
    #[command(display_order = 2)]
    Render {
        /// Wrap the rows in a standalone page with checkbox groups
        #[arg(long)]
        page: bool,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Authorship labels to select
        #[arg(long, value_name = "LABEL", num_args = 1..)]
        authorship: Vec<String>,

        /// Area labels to select
        #[arg(long, value_name = "LABEL", num_args = 1..)]
        area: Vec<String>,

        /// Venue labels to select
        #[arg(long, value_name = "LABEL", num_args = 1..)]
        venue: Vec<String>,
    },

    /// Show every label per category, with usage counts
    #[command(display_order = 3)]
    Tags,

    /// Validate the data file and report hygiene findings
    #[command(display_order = 4)]
    Check,

    /// Interactive filter session (toggle/reset checkboxes, watch the list)
    #[command(alias = "s", display_order = 5)]
    Session,

    /// Get or set configuration
    #[command(display_order = 6)]
    Config {
        /// Configuration key (e.g., highlight_author)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
