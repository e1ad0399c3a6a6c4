//! `/analytics/*`
//!
//! The backend does not publish these endpoints formally. The shapes decoded
//! here are the ones the dashboard renders; anything else falls back.

use larder_core::{AnalyticsSummary, CategoryShare, Timeframe, TopItem, UsagePoint, fallback};

use crate::client::RemoteClient;
use crate::fetched::{Fetched, live_or};
use crate::probe::ConnectivityState;
use crate::transport::Request;

pub const SUMMARY: &str = "/analytics/summary";
pub const USAGE: &str = "/analytics/usage";
pub const CATEGORIES: &str = "/analytics/categories";
pub const TOP_ITEMS: &str = "/analytics/top-items";

pub async fn summary(
    client: &RemoteClient,
    connectivity: ConnectivityState,
    timeframe: Timeframe,
) -> Fetched<AnalyticsSummary> {
    let request = Request::get(SUMMARY).query("timeframe", timeframe.as_str());
    live_or(client, connectivity, request, fallback::analytics_summary).await
}

pub async fn usage(
    client: &RemoteClient,
    connectivity: ConnectivityState,
    timeframe: Timeframe,
) -> Fetched<Vec<UsagePoint>> {
    let request = Request::get(USAGE).query("timeframe", timeframe.as_str());
    live_or(client, connectivity, request, || fallback::usage(timeframe)).await
}

pub async fn categories(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<Vec<CategoryShare>> {
    live_or(client, connectivity, Request::get(CATEGORIES), fallback::category_breakdown).await
}

pub async fn top_items(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<Vec<TopItem>> {
    live_or(client, connectivity, Request::get(TOP_ITEMS), fallback::top_items).await
}
