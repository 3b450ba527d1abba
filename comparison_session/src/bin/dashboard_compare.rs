use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use comparison_session::{ComparisonSession, DateRange};
use dashboard_client::{
    config::ClientConfig,
    io::plotly_json::JsonFileSurface,
    models::category::Category,
    providers::dashboard_rest::DashboardProvider,
};

#[derive(Parser)]
#[command(version, about = "Comparison dashboard CLI")]
struct Cli {
    /// Path to the config file (dashboard.toml). Falls back to the
    /// DASHBOARD_API_URL environment variable when omitted.
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Fetch and print the grouped symbol catalog
    Catalog,

    /// Fetch series for a set of items and write the comparison chart JSON
    Compare {
        /// Comparison item as SYMBOL:CATEGORY, e.g. "USD/KRW:currency" or
        /// "AAPL:stock_us" (repeatable)
        #[arg(long = "item", value_name = "SYMBOL:CATEGORY", required = true)]
        items: Vec<String>,

        /// Start date (inclusive), e.g. "2024-01-01"
        #[arg(long)]
        start: NaiveDate,

        /// End date (inclusive), e.g. "2024-06-30"
        #[arg(short, long)]
        end: NaiveDate,

        /// Directory the chart document is written into
        #[arg(long, default_value = "charts")]
        out: String,

        /// Target surface identifier (also the output file stem)
        #[arg(long, default_value = ComparisonSession::DEFAULT_TARGET)]
        target: String,
    },
}

fn parse_item(raw: &str) -> Result<(String, Category)> {
    let Some((symbol, dbkey)) = raw.rsplit_once(':') else {
        bail!("invalid item '{raw}': expected SYMBOL:CATEGORY");
    };
    let category = Category::from_dbkey(dbkey).with_context(|| {
        format!("unknown category '{dbkey}' (expected currency, index, stock_kr or stock_us)")
    })?;
    Ok((symbol.to_string(), category))
}

fn connect(config: Option<&str>) -> Result<DashboardProvider> {
    let provider = match config {
        Some(path) => {
            let cfg = ClientConfig::from_path(path)?;
            DashboardProvider::from_config(&cfg)?
        }
        None => DashboardProvider::from_env()?,
    };
    Ok(provider)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let provider = connect(cli.config.as_deref())?;

    match cli.cmd {
        Cmd::Catalog => {
            let surface = JsonFileSurface::new("charts");
            let mut session = ComparisonSession::new(Box::new(provider), Box::new(surface));
            session.load_catalog().await.context("failed to load symbol catalog")?;

            for (category, symbols) in session.catalog().iter() {
                println!("{category} {}", category.list_suffix());
                for symbol in symbols {
                    println!("  {symbol}");
                }
            }
        }
        Cmd::Compare {
            items,
            start,
            end,
            out,
            target,
        } => {
            let surface = JsonFileSurface::new(&out);
            let chart_path = surface.path_for(&target);
            let session = {
                let mut session = ComparisonSession::new(Box::new(provider), Box::new(surface))
                    .with_target(&target);
                for raw in &items {
                    let (symbol, category) = parse_item(raw)?;
                    session.add(&symbol, category)?;
                }
                session
            };

            let count = session.compare(DateRange::new(start, end)).await?;
            println!("{count} trace(s) written to {}", chart_path.display());
        }
    }

    Ok(())
}
