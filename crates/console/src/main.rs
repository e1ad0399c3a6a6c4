//! `larder`: terminal front end for the restaurant inventory backend.
//!
//! Each subcommand mounts one screen, refreshes it once and prints it.
//!
//! ```bash
//! LARDER_API_URL=http://localhost:8080/ larder inventory --status low-stock
//! larder orders --tab delivered --search dairy
//! larder analytics --timeframe quarter
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use anyhow::Context;
use clap::{Parser, Subcommand};
use larder_client::{AvailabilityProber, ClientConfig, RemoteClient};
use larder_core::{InventoryId, InventoryStatus, SupplierStatus, Timeframe};
use larder_observability::LogFormat;
use larder_views::{
    AlertsPanel, AnalyticsDashboard, DashboardStats, InventoryDetail, InventoryOverview, OrderTab, OrdersList,
    RecipeLibrary, RecipeTab, StatusFilter, SuppliersList, ViewContext,
};

mod render;

#[derive(Parser)]
#[command(name = "larder")]
#[command(author, version, about = "Restaurant inventory in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dashboard counters
    Dashboard,
    /// Inventory list
    Inventory {
        /// Case-insensitive match on name or category
        #[arg(short, long, default_value = "")]
        search: String,

        /// Show only these statuses (repeatable), e.g. `low-stock`
        #[arg(long, value_parser = render::parse_inventory_status)]
        status: Vec<InventoryStatus>,
    },
    /// One inventory item
    Item {
        id: InventoryId,
    },
    /// Purchase orders
    Orders {
        /// Case-insensitive match on name or supplier
        #[arg(short, long, default_value = "")]
        search: String,

        /// `all`, `requested` or `delivered`
        #[arg(short, long, default_value = "all")]
        tab: OrderTab,
    },
    /// Suppliers
    Suppliers {
        /// Case-insensitive match on company or categories
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(long, value_parser = render::parse_supplier_status)]
        status: Option<SupplierStatus>,
    },
    /// Low stock, expiring and out-of-stock alerts
    Alerts,
    /// Spending, usage and category breakdown
    Analytics {
        /// `week`, `month`, `quarter` or `year`
        #[arg(short, long, default_value = "month")]
        timeframe: Timeframe,
    },
    /// Local recipe book
    Recipes {
        #[arg(short, long, default_value = "")]
        search: String,

        /// `all`, `popular` or `recent`
        #[arg(short, long, default_value = "all")]
        tab: RecipeTab,
    },
    /// Check whether the backend answers its health endpoint
    Probe,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    larder_observability::init(LogFormat::from_env());

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ClientConfig::from_env().context("reading client configuration")?;
    let client = RemoteClient::from_config(config).context("building http client")?;
    let ctx = ViewContext::new(client.clone());

    let out = match cli.command {
        Commands::Dashboard => {
            let mut view = DashboardStats::new(ctx);
            view.refresh().await;
            render::dashboard(view.state())
        }
        Commands::Inventory { search, status } => {
            let mut view = InventoryOverview::new(ctx);
            view.filter.search = search;
            view.filter.status = StatusFilter::only(status);
            view.refresh().await;
            render::inventory(&view.visible(), view.state().banner())
        }
        Commands::Item { id } => {
            let mut view = InventoryDetail::new(ctx, id);
            view.refresh().await;
            render::item(view.state().data().as_ref(), view.state().banner())
        }
        Commands::Orders { search, tab } => {
            let mut view = OrdersList::new(ctx);
            view.filter.search = search;
            view.filter.tab = tab;
            view.refresh().await;
            render::orders(&view.visible(), view.state().banner())
        }
        Commands::Suppliers { search, status } => {
            let mut view = SuppliersList::new(ctx);
            view.filter.search = search;
            view.filter.status = status;
            view.refresh().await;
            render::suppliers(&view.visible(), view.state().banner())
        }
        Commands::Alerts => {
            let mut view = AlertsPanel::new(ctx);
            view.refresh().await;
            render::alerts(view.state().data(), view.state().banner())
        }
        Commands::Analytics { timeframe } => {
            let mut view = AnalyticsDashboard::new(ctx).with_timeframe(timeframe);
            view.refresh().await;
            render::analytics(&view)
        }
        Commands::Recipes { search, tab } => {
            let mut view = RecipeLibrary::default();
            view.filter.search = search;
            view.filter.tab = tab;
            render::recipes(&view.visible())
        }
        Commands::Probe => {
            let state = AvailabilityProber::new(client).check().await;
            format!("backend: {}\n", state.as_str())
        }
    };

    print!("{out}");
    Ok(())
}
