use clap::{Args, Parser, Subcommand};
use pikdex::error::Result;
use pikdex::model::{Color, DecorType, Status};
use pikdex::view::EntryFilter;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pikdex", bin_name = "pikdex", version = get_version())]
#[command(about = "Track your Pikmin collection from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Optional criteria shared by `list`, `stats` and `export`.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only entries of this color (e.g. red, winged)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Only entries of this decor category (e.g. sweet-shop)
    #[arg(short, long)]
    pub decor: Option<String>,

    /// Only entries at this stage (seedling, pikmin, decor)
    #[arg(short, long)]
    pub status: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<EntryFilter> {
        let mut filter = EntryFilter::default();
        if let Some(color) = &self.color {
            filter = filter.with_color(color.parse::<Color>()?);
        }
        if let Some(decor) = &self.decor {
            filter = filter.with_decor_type(decor.parse::<DecorType>()?);
        }
        if let Some(status) = &self.status {
            filter = filter.with_status(status.parse::<Status>()?);
        }
        Ok(filter)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a new entry
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Color (e.g. red, ice)
        color: String,

        /// Decor category (e.g. cafe, "sweet shop", sweet-shop)
        decor: String,

        /// Name words (joined with spaces; defaults to "<Color> Pikmin")
        #[arg(num_args = 0..)]
        name: Vec<String>,

        /// Starting stage
        #[arg(short, long, default_value = "seedling")]
        status: String,
    },

    /// List entries, newest first
    #[command(alias = "ls", display_order = 2)]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Rename an entry or change its stage
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// List number or id prefix
        selector: String,

        /// New name, stored as typed
        #[arg(short, long)]
        name: Option<String>,

        /// New stage
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Permanently delete one or more entries
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// List numbers or id prefixes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show totals and completion rate
    #[command(display_order = 5)]
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export entries as comma-separated text
    #[command(display_order = 6)]
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output file (defaults to the configured export file)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Print the accepted colors, decor categories and stages
    #[command(display_order = 7)]
    Options,

    /// Get or set configuration
    #[command(display_order = 8)]
    Config {
        /// Configuration key (export-file, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
