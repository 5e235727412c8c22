mod catalog;
mod cli;
mod config;
mod error;
mod pipeline;
mod render;
mod report;
mod ui;
mod views;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use catalog::{CommunityFeed, FeedGenerator, FeedPaging};
use cli::{Cli, Command};
use config::ScoutConfig;
use pipeline::{RunRecord, Session, TaskRequest};
use report::ResearchReport;
use ui::TaskProgress;
use views::FeedView;

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ScoutConfig::load()?;
    if let Some(scale) = cli.time_scale {
        config.time_scale = scale;
        config.validate().context("invalid --time-scale")?;
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Research { url, prompt, export } => {
            let request = TaskRequest::research(&url, prompt.as_deref())?;
            run_task(&request, &config, cli.json).await?;
            println!("{}", render::features(&catalog::feature_categories()));
            println!(
                "{}",
                render::research_overview(catalog::FEATURE_STATS, catalog::USER_FLOWS)
            );

            if export && let TaskRequest::Research { url, prompt } = &request {
                let path = ResearchReport::new(url, prompt).export(&config.report_dir)?;
                println!("报告已导出: {}", path.display());
            }
        }
        Command::Compare { product_a, product_b } => {
            let request = TaskRequest::compare(&product_a, &product_b)?;
            run_task(&request, &config, cli.json).await?;
            println!("{}", render::comparison(&catalog::comparison(), &product_a, &product_b));
        }
        Command::Sentiment { product } => {
            let request = TaskRequest::sentiment(&product)?;
            run_task(&request, &config, cli.json).await?;
            let posts = catalog::social_posts();
            let dist = views::sentiment_distribution(&posts);
            println!("{}", render::sentiment(&posts, dist));
        }
        Command::Feed { view, pages, seed } => {
            let generator = match seed {
                Some(seed) => FeedGenerator::seeded(seed),
                None => FeedGenerator::from_entropy(),
            };
            let paging = FeedPaging {
                initial: config.feed_initial,
                page_size: config.feed_page_size,
                limit: config.feed_limit,
                load_delay: config.feed_load_delay()?,
            };
            let mut feed = CommunityFeed::new(generator, paging);
            let added = feed.load_pages(pages).await;
            info!(added, total = feed.cards().len(), "feed loaded");

            let view: FeedView = view.into();
            println!("{}", render::feed(&view.apply(feed.cards()), feed.has_more()));
        }
        Command::Map { query, category, network } => {
            let all = catalog::products();
            let in_category = match category.as_deref() {
                Some(category) => views::products_in_category(&all, category),
                None => all.iter().collect(),
            };
            let mut shown = views::search_products(&all, query.as_deref().unwrap_or_default());
            shown.retain(|p| in_category.iter().any(|c| c.id == p.id));

            if network {
                let links: Vec<_> = shown
                    .iter()
                    .filter_map(|p| views::product_links(&all, &p.name))
                    .collect();
                println!("{}", render::network(&links));
            } else {
                for (status, count) in views::status_counts(&all) {
                    print!("{status} {count}  ");
                }
                println!();
                println!("{}", render::products(&shown));
            }
        }
    }

    Ok(())
}

/// Runs one simulated task with a live progress bar. Ctrl-C cancels the run.
async fn run_task(request: &TaskRequest, config: &ScoutConfig, json: bool) -> Result<RunRecord> {
    let mut session = Session::timed(config.time_scale);
    let slot = session.slot();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            slot.cancel_current();
        }
    });

    let kind = request.kind();
    let progress = TaskProgress::start(kind.title(), &request.subject(), !json);
    let result = session.run(request, &progress).await;
    interrupt.abort();
    progress.finish(&result);

    if json && let Some(record) = session.last_record() {
        progress.print_record(record);
    }
    Ok(result?)
}
