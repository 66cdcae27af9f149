mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "doctree",
    version,
    about = "Index markdown documents into section trees and query them"
)]
struct Cli {
    /// Config file (default: ~/.config/doctree/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Profile to use from the config file
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Document root, overriding the profile and DOCS_ROOT
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Index the document root and report statistics
    Index {
        /// Print every indexed file
        #[arg(short, long)]
        verbose: bool,
    },

    /// List indexed documents
    List(ListArgs),

    /// Search node titles and content
    Search(SearchArgs),

    /// Show the section outline of a document
    Tree(TreeArgs),

    /// Print the content of specific sections
    Node(NodeArgs),

    /// Print a section and all of its subsections
    Subtree(SubtreeArgs),

    /// Show catalog statistics
    Stats(StatsArgs),
}

/// Output format for query commands.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Table,
    /// JSON output
    Json,
    /// Identifiers only, one per line
    Quiet,
}

/// Shared output flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Shorthand for --output quiet
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Keyword matched against title, description and path
    #[arg(long)]
    pub query: Option<String>,

    /// Only documents with this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Maximum documents to show (1-100)
    #[arg(long, default_value_t = 30)]
    pub limit: usize,

    /// Number of documents to skip
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    #[command(flatten)]
    pub format: OutputArgs,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search terms
    pub query: String,

    /// Only search this document
    #[arg(long = "doc")]
    pub doc_id: Option<String>,

    /// Maximum results (1-50)
    #[arg(long, default_value_t = 15)]
    pub limit: usize,

    #[command(flatten)]
    pub format: OutputArgs,
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Document ID (from list or search)
    pub doc_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NodeArgs {
    /// Document ID
    pub doc_id: String,

    /// Node IDs (from tree or search)
    #[arg(required = true, num_args = 1..=10)]
    pub node_ids: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SubtreeArgs {
    /// Document ID
    pub doc_id: String,

    /// Root node ID
    pub node_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    let global = cmd::GlobalOpts {
        config: cli.config.as_deref(),
        profile: cli.profile.as_deref(),
        root: cli.root.as_deref(),
    };

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&global),
        Commands::Index { verbose } => cmd::index::run(&global, verbose),
        Commands::List(args) => cmd::list::run(&global, args),
        Commands::Search(args) => cmd::search::run(&global, args),
        Commands::Tree(args) => cmd::tree::run(&global, args),
        Commands::Node(args) => cmd::node::run(&global, args),
        Commands::Subtree(args) => cmd::subtree::run(&global, args),
        Commands::Stats(args) => cmd::stats::run(&global, args),
    }

    logging::shutdown();
}
