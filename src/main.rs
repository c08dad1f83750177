//! Scour main entry point
//!
//! Command-line interface for the crawl, index, and search stages.

use clap::{Parser, Subcommand};
use scour::config::load_config_with_hash;
use scour::index::{build_index, Index};
use scour::query::{evaluate_query, is_searchable, parse_query};
use scour::storage::{FsPageStore, PageStore};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Scour: a small end-to-end search stack
///
/// Crawls a site from a seed URL, indexes the saved pages into an inverted
/// word index, and answers boolean queries against that index.
#[derive(Parser, Debug)]
#[command(name = "scour")]
#[command(version = "1.0.0")]
#[command(about = "Crawl, index, and search a website", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl from the configured seed URL and persist fetched pages
    Crawl {
        /// Path to TOML configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },

    /// Build the inverted index from persisted pages
    Index {
        /// Path to TOML configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },

    /// Answer interactive boolean queries against the index
    Search {
        /// Path to TOML configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config_path = match &cli.command {
        Command::Crawl { config } | Command::Index { config } | Command::Search { config } => {
            config.clone()
        }
    };

    tracing::info!("Loading configuration from: {}", config_path.display());
    let (config, _config_hash) = match load_config_with_hash(&config_path) {
        Ok((cfg, hash)) => {
            tracing::debug!("Configuration loaded (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    match cli.command {
        Command::Crawl { .. } => handle_crawl(&config).await?,
        Command::Index { .. } => handle_index(&config).await?,
        Command::Search { .. } => handle_search(&config)?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("scour=info,warn"),
            1 => EnvFilter::new("scour=debug,info"),
            2 => EnvFilter::new("scour=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the crawl subcommand
async fn handle_crawl(config: &scour::Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Seed: {} (max depth {})",
        config.crawler.seed_url,
        config.crawler.max_depth
    );

    scour::crawler::crawl(config).await?;

    println!("✓ Crawl complete, pages written to {}", config.output.pages_dir);
    Ok(())
}

/// Handles the index subcommand
async fn handle_index(config: &scour::Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = FsPageStore::new(Path::new(&config.output.pages_dir))?;
    let page_count = store.ids()?.len();

    let index = build_index(Arc::new(store)).await?;
    index.save(Path::new(&config.output.index_path))?;

    println!(
        "✓ Indexed {} pages: {} unique words written to {}",
        page_count,
        index.word_count(),
        config.output.index_path
    );
    Ok(())
}

/// Handles the search subcommand: an interactive query loop over stdin
fn handle_search(config: &scour::Config) -> Result<(), Box<dyn std::error::Error>> {
    let index = Index::load(Path::new(&config.output.index_path))?;
    println!(
        "Loaded index from {}: {} unique words",
        config.output.index_path,
        index.word_count()
    );

    let stdin = std::io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?.to_lowercase();

        if line.trim().is_empty() {
            prompt()?;
            continue;
        }
        if !is_searchable(&line) {
            println!("invalid query (use only letters, whitespace, and dash)");
            prompt()?;
            continue;
        }

        match parse_query(&line) {
            None => println!("invalid query (invalid syntax)"),
            Some(groups) => {
                let hits = evaluate_query(&groups, &index);
                println!("---- Search results ----");
                if hits.is_empty() {
                    println!("no results found");
                } else {
                    for hit in hits {
                        println!("url: {}, rank: {}", hit.url, hit.score);
                    }
                }
            }
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
