//! Alerts synthesised client-side from the three inventory alert sources.
//!
//! Alerts have no persisted identity. Their id is derived from the kind and
//! the source item id, so the same source row always yields the same alert id
//! across refreshes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::inventory::InventoryItem;

/// Which source query produced an alert.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowStock,
    Expiring,
    OutOfStock,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::LowStock => "low_stock",
            AlertKind::Expiring => "expiring",
            AlertKind::OutOfStock => "out_of_stock",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AlertKind::LowStock => "Low Stock Alert",
            AlertKind::Expiring => "Expiring Soon",
            AlertKind::OutOfStock => "Out of Stock",
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            AlertKind::OutOfStock => Priority::High,
            AlertKind::LowStock | AlertKind::Expiring => Priority::Medium,
        }
    }

    /// Default quantity pre-filled when reordering from this kind of alert.
    pub fn reorder_quantity(&self) -> Decimal {
        match self {
            AlertKind::OutOfStock => Decimal::from(10),
            AlertKind::LowStock | AlertKind::Expiring => Decimal::from(5),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub item: InventoryItem,
}

impl Alert {
    pub fn from_item(kind: AlertKind, item: InventoryItem) -> Self {
        let description = match kind {
            AlertKind::LowStock => format!(
                "{} is running low ({} {} remaining)",
                item.name, item.quantity, item.unit
            ),
            AlertKind::Expiring => match item.expires_on {
                Some(date) => format!("{} expires on {}", item.name, date.format("%b %-d, %Y")),
                None => format!("{} is expiring soon", item.name),
            },
            AlertKind::OutOfStock => format!("{} is out of stock", item.name),
        };

        Self {
            id: format!("{}_{}", kind.as_str(), item.id),
            kind,
            title: kind.title().to_string(),
            description,
            priority: kind.priority(),
            item,
        }
    }

    /// Merge the three source lists into one, in the order low stock,
    /// expiring, out of stock.
    pub fn merge(
        low_stock: Vec<InventoryItem>,
        expiring: Vec<InventoryItem>,
        out_of_stock: Vec<InventoryItem>,
    ) -> Vec<Alert> {
        low_stock
            .into_iter()
            .map(|item| Alert::from_item(AlertKind::LowStock, item))
            .chain(expiring.into_iter().map(|item| Alert::from_item(AlertKind::Expiring, item)))
            .chain(
                out_of_stock
                    .into_iter()
                    .map(|item| Alert::from_item(AlertKind::OutOfStock, item)),
            )
            .collect()
    }
}

impl Entity for Alert {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
