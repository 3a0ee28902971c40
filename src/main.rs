use anyhow::Context;
use chrono::Local;
use clap::Parser;
use seatwatch::config::{Cli, Command, SearchArgs};
use seatwatch::core::catalog::{resolve_show, ShowCatalog};
use seatwatch::utils::{logger, validation::Validate};
use seatwatch::{HttpClient, LocalStorage, ScrapeEngine, ScrapePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("starting seatwatch");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let fetcher = HttpClient::new(cli.base_url.clone(), cli.host_header.clone());

    let outcome = match &cli.command {
        Command::Shows => list_shows(&fetcher).await,
        Command::Search(args) => run_search(&fetcher, args).await,
    };

    if let Err(e) = outcome {
        tracing::error!("run failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn list_shows(fetcher: &HttpClient) -> anyhow::Result<()> {
    let catalog = ShowCatalog::fetch(fetcher)
        .await
        .context("fetching show listing")?;

    if catalog.is_empty() {
        tracing::warn!("listing page advertises no shows");
    }
    for entry in catalog.entries() {
        println!("{}  {}", entry.id, entry.name);
    }
    Ok(())
}

async fn run_search(fetcher: &HttpClient, args: &SearchArgs) -> anyhow::Result<()> {
    let show_id = resolve_show(fetcher, &args.show)
        .await
        .context("resolving show")?;

    let today = Local::now().date_naive();
    let request = args.scrape_request(show_id, today);
    tracing::info!(
        "scraping show {} for {} tickets, {} to {}",
        request.show_id,
        request.quantity,
        request.window.start,
        request.window.end,
    );

    let storage = LocalStorage::new(".".to_string());
    let pipeline = ScrapePipeline::new(fetcher.clone(), storage, args.clone(), request);
    let output_path = ScrapeEngine::new(pipeline)
        .run()
        .await
        .context("scrape run failed")?;

    println!("✅ tickets written to {}", output_path);
    Ok(())
}
