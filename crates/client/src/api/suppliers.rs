//! `/supplier/*`

use larder_core::{Supplier, SupplierDraft, SupplierName, fallback};

use crate::client::RemoteClient;
use crate::error::ClientError;
use crate::fetched::{Fetched, live_or};
use crate::probe::ConnectivityState;
use crate::transport::Request;

pub const ALL: &str = "/supplier/getAll";
pub const NAMES: &str = "/supplier/names";
pub const SAVE: &str = "/supplier/save";

pub async fn all(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<Vec<Supplier>> {
    live_or(client, connectivity, Request::get(ALL), fallback::suppliers).await
}

/// Company names for the order form's supplier picker.
pub async fn names(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<Vec<SupplierName>> {
    live_or(client, connectivity, Request::get(NAMES), fallback::supplier_names).await
}

pub async fn save(client: &RemoteClient, draft: &SupplierDraft) -> Result<Supplier, ClientError> {
    client.post(SAVE, draft).await
}
