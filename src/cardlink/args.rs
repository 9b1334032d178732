use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardlink")]
#[command(
    about = "Wrap attorney cards in static HTML pages with links to their profile pages",
    long_about = None
)]
pub struct Cli {
    /// Load the file list and name-to-link mapping from a JSON config
    /// instead of the built-in roster tables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Resolve target files against this directory instead of the
    /// current directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
