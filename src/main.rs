//! CLI entry point for repotree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use repotree::{
    GitSource, JsonSource, KindFilter, ListFormat, ListRequest, ListingResult, ListingSource,
    OutputConfig, Query, RepoLister, RepoRef, Result, TreeFormat, TreeRequest, print_payload,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "repotree")]
#[command(about = "List repository contents as filtered, paginated listings or trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding git repositories as <ROOT>/<owner>/<repository>
    #[arg(long, global = true, value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// Read JSON listings from <DIR>/<owner>/<repository>/<branch>.json instead of git
    #[arg(long = "listing-dir", global = true, value_name = "DIR")]
    listing_dir: Option<PathBuf>,

    /// Stop listing a git tree after N entries and mark it truncated
    #[arg(long = "max-entries", global = true, value_name = "N")]
    max_entries: Option<usize>,

    /// Prefix for entry URLs produced from git repositories
    #[arg(long = "base-url", global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flat listing of repository entries
    List {
        #[command(flatten)]
        target: Target,

        #[command(flatten)]
        query: QueryArgs,

        /// Output format
        #[arg(short, long, default_value = "compact")]
        format: ListFormat,
    },
    /// Directory tree of repository entries
    Tree {
        #[command(flatten)]
        target: Target,

        #[command(flatten)]
        query: QueryArgs,

        /// Output format
        #[arg(short, long, default_value = "tree")]
        format: TreeFormat,
    },
}

#[derive(Args, Debug)]
struct Target {
    /// Repository owner
    owner: String,
    /// Repository name
    repository: String,
    /// Branch, tag or commit
    branch: String,
}

impl From<Target> for RepoRef {
    fn from(target: Target) -> Self {
        RepoRef::new(target.owner, target.repository, target.branch)
    }
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Glob matched against entry paths (slash-free patterns also match basenames)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Entry kinds to include
    #[arg(short, long, default_value = "all")]
    kind: KindFilter,

    /// Maximum number of entries to show (default depends on format)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Number of entries to skip (negative values count as 0)
    #[arg(short, long, allow_negative_numbers = true)]
    offset: Option<i64>,
}

impl From<QueryArgs> for Query {
    fn from(args: QueryArgs) -> Self {
        Query {
            kind: args.kind,
            pattern: args.pattern,
            limit: args.limit,
            offset: args.offset,
        }
    }
}

fn init_tracing(verbose: bool) {
    if !verbose {
        return;
    }
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("repotree: warning: could not install log subscriber");
    }
}

fn build_source(cli: &Cli) -> Box<dyn ListingSource> {
    if let Some(dir) = &cli.listing_dir {
        return Box::new(JsonSource::new(dir.clone()));
    }
    let mut source = GitSource::new(cli.root.clone());
    if let Some(max) = cli.max_entries {
        source = source.with_max_entries(max);
    }
    if let Some(url) = &cli.base_url {
        source = source.with_base_url(url.clone());
    }
    Box::new(source)
}

fn run(cli: Cli) -> Result<ListingResult> {
    let lister = RepoLister::new(build_source(&cli));
    match cli.command {
        Command::List {
            target,
            query,
            format,
        } => lister.list_contents(&ListRequest {
            repo: target.into(),
            query: query.into(),
            format,
        }),
        Command::Tree {
            target,
            query,
            format,
        } => lister.directory_tree(&TreeRequest {
            repo: target.into(),
            query: query.into(),
            format,
        }),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output_config = OutputConfig {
        use_color: should_use_color(cli.color),
    };

    let result = match run(cli) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("repotree: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = print_payload(&result.text, &output_config) {
        eprintln!("repotree: error writing output: {}", e);
        process::exit(1);
    }
}
