use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hotelfuse_aggregator::{catalog, extract_available_ids, merge_hotels, SupplierClient};
use hotelfuse_core::{config::load_app_config, load_suppliers};

#[derive(Debug, Parser)]
#[command(name = "hotelfuse")]
#[command(about = "Hotel supplier aggregation command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch all suppliers, merge, and print the hotel catalog as JSON.
    Hotels {
        /// Only include these hotel ids (comma-separated, case-insensitive).
        #[arg(long, value_delimiter = ',')]
        hotel_ids: Vec<String>,
        /// Only include these destination ids (comma-separated).
        #[arg(long, value_delimiter = ',')]
        destination_ids: Vec<i64>,
        /// Limit output to this many hotels per page.
        #[arg(long)]
        items_per_page: Option<usize>,
        /// Select a 1-indexed page (defaults to 10 items per page).
        #[arg(long)]
        page_number: Option<usize>,
    },
    /// Print the hotel and destination ids resolvable from the suppliers.
    Ids,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let suppliers = load_suppliers(&config.suppliers_path)?.suppliers;
    tracing::info!(
        suppliers = suppliers.len(),
        path = %config.suppliers_path.display(),
        "loaded supplier configuration"
    );
    let client = SupplierClient::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.backoff_base_ms,
    )?;

    let cli = Cli::parse();
    let data = client.fetch_all(&suppliers).await;
    tracing::info!(
        suppliers = data.len(),
        records = data.record_count(),
        "fetch cycle complete"
    );

    match cli.command {
        Commands::Hotels {
            hotel_ids,
            destination_ids,
            items_per_page,
            page_number,
        } => {
            let merged = merge_hotels(&data, &suppliers);
            let filtered = catalog::filter_hotels(&merged, &hotel_ids, &destination_ids);
            let page = catalog::paginate(filtered, items_per_page, page_number);
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Commands::Ids => {
            let ids = extract_available_ids(&data, &suppliers);
            println!("{}", serde_json::to_string_pretty(&ids)?);
        }
    }

    Ok(())
}
