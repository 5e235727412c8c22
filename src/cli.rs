//! Command line interface built on clap.
//!
//! [`Cli`] carries one subcommand per dashboard page plus the global
//! flags (`--time-scale`, `--json`, `--verbose`).

use clap::{Parser, Subcommand, ValueEnum};

use crate::views::FeedView;

/// prodscope — product research toolkit with simulated research agents.
#[derive(Debug, Parser)]
#[command(name = "prodscope", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Multiplier for simulated step durations (0 runs instantly).
    #[arg(long, global = true)]
    pub time_scale: Option<f64>,

    /// Print the run record as JSON after a task run.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Enable verbose logging.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Feed tab accepted on the command line, mapped to [`FeedView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedArg {
    /// Posts with at least 1000 likes, most liked first.
    Hot,
    /// All posts, oldest first.
    New,
    /// Posts with a location, most liked first.
    Nearby,
}

impl From<FeedArg> for FeedView {
    fn from(arg: FeedArg) -> Self {
        match arg {
            FeedArg::Hot => FeedView::Hot,
            FeedArg::New => FeedView::New,
            FeedArg::Nearby => FeedView::Nearby,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyse a product website and list its features.
    Research {
        /// Website URL to analyse.
        url: String,

        /// Optional focus for the analysis.
        #[arg(long)]
        prompt: Option<String>,

        /// Write the Markdown report to the report directory.
        #[arg(long, default_value_t = false)]
        export: bool,
    },

    /// Compare the feature sets of two products.
    Compare {
        /// URL of product A.
        product_a: String,
        /// URL of product B.
        product_b: String,
    },

    /// Collect and summarise social media sentiment about a product.
    Sentiment {
        /// Product name to search for.
        product: String,
    },

    /// Browse the community feed.
    Feed {
        #[arg(long, value_enum, default_value_t = FeedArg::Hot)]
        view: FeedArg,

        /// Extra pages to load after the first.
        #[arg(long, default_value_t = 0)]
        pages: usize,

        /// Seed for a reproducible feed.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the product map.
    Map {
        /// Filter by name, category or tag.
        #[arg(long)]
        query: Option<String>,

        /// Only show products in this category.
        #[arg(long)]
        category: Option<String>,

        /// Show the connection network instead of cards.
        #[arg(long, default_value_t = false)]
        network: bool,
    },
}
