//! Interactive menu over a Binary Search Tree of integers.
//!
//! Reads menu choices and values from stdin, one per line, and writes results to stdout. Logs
//! go to stderr and are filtered with `--log-level` (or `BST_LOG`).

use std::io;

use anyhow::Result;
use bst_engine::Tree;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod menu;

use menu::Menu;

#[derive(Parser)]
#[command(name = "bst-menu")]
#[command(about = "Insert, search, delete and list integers in a Binary Search Tree", long_about = None)]
struct Cli {
    /// Log filter, e.g. `debug` or `bst_engine=debug`
    #[arg(long, env = "BST_LOG", default_value = "warn")]
    log_level: String,

    /// Keys to insert before the menu starts, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    preload: Vec<i64>,

    /// Don't print the menu or prompts, only results
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level)?)
        .with_writer(io::stderr)
        .init();

    // Duplicates are logged by the tree and otherwise skipped.
    let mut tree: Tree<i64> = cli.preload.into_iter().collect();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock(), cli.quiet).run(&mut tree)
}
