//! `/inventory/*`

use larder_core::{Alert, InventoryDraft, InventoryId, InventoryItem, InventoryStats, fallback};
use rust_decimal::Decimal;

use crate::api::orders;
use crate::client::RemoteClient;
use crate::error::ClientError;
use crate::fetched::{FallbackReason, Fetched, live_or};
use crate::probe::ConnectivityState;
use crate::transport::Request;

pub const ALL: &str = "/inventory/getAll";
pub const AVAILABLE_COUNT: &str = "/inventory/available";
pub const LOW_STOCK_COUNT: &str = "/inventory/low-stock";
pub const EXPIRING_SOON_COUNT: &str = "/inventory/expiring-soon";
pub const LOW_STOCK_ITEMS: &str = "/inventory/low-stock-all";
pub const EXPIRING_SOON_ITEMS: &str = "/inventory/expiring-soon-all";
pub const OUT_OF_STOCK_ITEMS: &str = "/inventory/out-of-stock-all";
pub const SAVE: &str = "/inventory/save";
pub const UPDATE: &str = "/inventory/update";

pub fn item_path(id: InventoryId) -> String {
    format!("/inventory/{id}")
}

pub async fn all(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<Vec<InventoryItem>> {
    live_or(client, connectivity, Request::get(ALL), fallback::inventory_items).await
}

/// A single item. The fallback is the fallback record with the same id, if any.
pub async fn by_id(
    client: &RemoteClient,
    connectivity: ConnectivityState,
    id: InventoryId,
) -> Fetched<Option<InventoryItem>> {
    live_or(client, connectivity, Request::get(item_path(id)), || {
        fallback::inventory_items().into_iter().find(|item| item.id == id)
    })
    .await
}

pub async fn available_count(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<u64> {
    live_or(client, connectivity, Request::get(AVAILABLE_COUNT), || {
        fallback::inventory_stats().available
    })
    .await
}

pub async fn low_stock_count(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<u64> {
    live_or(client, connectivity, Request::get(LOW_STOCK_COUNT), || {
        fallback::inventory_stats().low_stock
    })
    .await
}

pub async fn expiring_soon_count(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<u64> {
    live_or(client, connectivity, Request::get(EXPIRING_SOON_COUNT), || {
        fallback::inventory_stats().expiring_soon
    })
    .await
}

pub async fn low_stock_items(
    client: &RemoteClient,
    connectivity: ConnectivityState,
) -> Fetched<Vec<InventoryItem>> {
    live_or(client, connectivity, Request::get(LOW_STOCK_ITEMS), fallback::low_stock_items).await
}

pub async fn expiring_soon_items(
    client: &RemoteClient,
    connectivity: ConnectivityState,
) -> Fetched<Vec<InventoryItem>> {
    live_or(client, connectivity, Request::get(EXPIRING_SOON_ITEMS), fallback::expiring_items).await
}

pub async fn out_of_stock_items(
    client: &RemoteClient,
    connectivity: ConnectivityState,
) -> Fetched<Vec<InventoryItem>> {
    live_or(client, connectivity, Request::get(OUT_OF_STOCK_ITEMS), fallback::out_of_stock_items).await
}

/// The four dashboard counters, fetched concurrently.
///
/// All or nothing: if any counter fails, every counter comes from the
/// fallback set so the dashboard never mixes live and substitute figures.
pub async fn stats(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<InventoryStats> {
    if connectivity.is_offline() {
        tracing::warn!("backend unavailable, skipping inventory stats");
        return Fetched::fallback(fallback::inventory_stats(), FallbackReason::BackendUnavailable);
    }

    let (available, low_stock, expiring_soon, value) = tokio::join!(
        client.get::<u64>(AVAILABLE_COUNT, &[]),
        client.get::<u64>(LOW_STOCK_COUNT, &[]),
        client.get::<u64>(EXPIRING_SOON_COUNT, &[]),
        client.get::<Decimal>(orders::INVENTORY_VALUE, &[]),
    );
    let failed = [available.is_err(), low_stock.is_err(), expiring_soon.is_err(), value.is_err()]
        .into_iter()
        .filter(|failed| *failed)
        .count();

    let combined = available.and_then(|available| {
        Ok(InventoryStats {
            available,
            low_stock: low_stock?,
            expiring_soon: expiring_soon?,
            inventory_value: value?,
        })
    });

    match combined {
        Ok(stats) => Fetched::Live(stats),
        Err(first) => {
            let reason = FallbackReason::aggregate(failed, 4, first);
            tracing::debug!(reason = %reason, "inventory stats falling back");
            Fetched::fallback(fallback::inventory_stats(), reason)
        }
    }
}

/// Low stock, expiring and out of stock items fetched concurrently and
/// merged into alerts, all or nothing.
pub async fn alerts(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<Vec<Alert>> {
    if connectivity.is_offline() {
        tracing::warn!("backend unavailable, skipping alert sources");
        return Fetched::fallback(fallback::alerts(), FallbackReason::BackendUnavailable);
    }

    let (low_stock, expiring, out_of_stock) = tokio::join!(
        client.get::<Vec<InventoryItem>>(LOW_STOCK_ITEMS, &[]),
        client.get::<Vec<InventoryItem>>(EXPIRING_SOON_ITEMS, &[]),
        client.get::<Vec<InventoryItem>>(OUT_OF_STOCK_ITEMS, &[]),
    );
    let failed = [low_stock.is_err(), expiring.is_err(), out_of_stock.is_err()]
        .into_iter()
        .filter(|failed| *failed)
        .count();

    match low_stock.and_then(|low_stock| Ok((low_stock, expiring?, out_of_stock?))) {
        Ok((low_stock, expiring, out_of_stock)) => {
            Fetched::Live(Alert::merge(low_stock, expiring, out_of_stock))
        }
        Err(first) => {
            let reason = FallbackReason::aggregate(failed, 3, first);
            tracing::debug!(reason = %reason, "alert sources falling back");
            Fetched::fallback(fallback::alerts(), reason)
        }
    }
}

pub async fn save(client: &RemoteClient, draft: &InventoryDraft) -> Result<InventoryItem, ClientError> {
    client.post(SAVE, draft).await
}

pub async fn update(client: &RemoteClient, item: &InventoryItem) -> Result<InventoryItem, ClientError> {
    client.put(UPDATE, item).await
}

pub async fn delete(client: &RemoteClient, id: InventoryId) -> Result<(), ClientError> {
    client.delete(&item_path(id)).await
}
