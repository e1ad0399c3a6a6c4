//! Dashboard counters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate of the four dashboard counter endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    /// `/inventory/available`
    pub available: u64,
    /// `/inventory/low-stock`
    pub low_stock: u64,
    /// `/inventory/expiring-soon`
    pub expiring_soon: u64,
    /// `/order/inventory-value`
    pub inventory_value: Decimal,
}
