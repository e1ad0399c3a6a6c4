//! Inventory items as reported by the backend.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::InventoryId;

wire_status! {
    /// Stock classification reported by the server.
    ///
    /// The client never derives this from quantity or expiry; it trusts the
    /// server's value.
    InventoryStatus {
        InStock => "In Stock",
        LowStock => "Low Stock",
        OutOfStock => "Out of Stock",
        ExpiringSoon => "Expiring Soon",
    }
}

/// An inventory row (`/inventory/getAll`, `/inventory/{id}`, the alert sources).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "inventory_id")]
    pub id: InventoryId,
    pub name: String,
    pub category: String,
    pub quantity: Decimal,
    pub unit: String,
    pub status: InventoryStatus,
    /// `None` when the server has no expiry on record.
    #[serde(rename = "exp_date", default, deserialize_with = "crate::wire::optional_date")]
    pub expires_on: Option<NaiveDate>,
}

impl InventoryItem {
    /// Case-insensitive match of `needle` against name or category.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

impl Entity for InventoryItem {
    type Id = InventoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Payload for `POST /inventory/save` (identity is assigned by the server).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDraft {
    pub name: String,
    pub category: String,
    pub quantity: Decimal,
    pub unit: String,
    pub status: InventoryStatus,
    pub exp_date: NaiveDate,
}
