//! Purchase orders placed with suppliers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::OrderId;

wire_status! {
    /// Lifecycle status of an order.
    OrderStatus {
        Requested => "Requested",
        InTransit => "In Transit",
        Delivered => "Delivered",
        Cancelled => "Cancelled",
    }
}

/// An order row (`/order/getAll`).
///
/// `supplier` references the supplier by company name, not by id. The backend
/// owns that schema; the client keeps the denormalised reference as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "order_id")]
    pub id: OrderId,
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub created: NaiveDate,
    /// `None` while delivery is still to be determined.
    #[serde(default, deserialize_with = "crate::wire::optional_date")]
    pub delivery: Option<NaiveDate>,
    pub status: OrderStatus,
    pub quantity: Decimal,
    pub unit: String,
    pub price: Decimal,
}

/// The only fields of an existing order the client may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEdits {
    pub status: OrderStatus,
    pub delivery: Option<NaiveDate>,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl Order {
    pub fn edits(&self) -> OrderEdits {
        OrderEdits {
            status: self.status.clone(),
            delivery: self.delivery,
            quantity: self.quantity,
            price: self.price,
        }
    }

    /// Returns the full record to send to `PUT /order/update`.
    ///
    /// Identity and creation fields are carried over untouched.
    pub fn with_edits(&self, edits: OrderEdits) -> Order {
        Order {
            status: edits.status,
            delivery: edits.delivery,
            quantity: edits.quantity,
            price: edits.price,
            ..self.clone()
        }
    }

    /// Case-insensitive match of `needle` against item name or supplier.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.supplier.to_lowercase().contains(needle)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Payload for `POST /order/save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub created: NaiveDate,
    pub delivery: NaiveDate,
    pub status: OrderStatus,
    pub quantity: Decimal,
    pub unit: String,
    pub price: Decimal,
}
