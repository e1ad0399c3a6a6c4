//! `/order/*`

use larder_core::{Order, OrderDraft, fallback};
use rust_decimal::Decimal;

use crate::client::RemoteClient;
use crate::error::ClientError;
use crate::fetched::{Fetched, live_or};
use crate::probe::ConnectivityState;
use crate::transport::Request;

pub const ALL: &str = "/order/getAll";
pub const SAVE: &str = "/order/save";
pub const UPDATE: &str = "/order/update";
pub const INVENTORY_VALUE: &str = "/order/inventory-value";

pub async fn all(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<Vec<Order>> {
    live_or(client, connectivity, Request::get(ALL), fallback::orders).await
}

pub async fn inventory_value(client: &RemoteClient, connectivity: ConnectivityState) -> Fetched<Decimal> {
    live_or(client, connectivity, Request::get(INVENTORY_VALUE), || {
        fallback::inventory_stats().inventory_value
    })
    .await
}

pub async fn save(client: &RemoteClient, draft: &OrderDraft) -> Result<Order, ClientError> {
    client.post(SAVE, draft).await
}

/// Sends the whole order; callers build it with [`Order::with_edits`] so only
/// the editable fields differ from what the server holds.
pub async fn update(client: &RemoteClient, order: &Order) -> Result<Order, ClientError> {
    client.put(UPDATE, order).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryTransport, Reply};
    use crate::transport::Method;
    use serde_json::json;
    use std::sync::Arc;

    /// Every field is a string on the wire, including a missing delivery date
    /// rendered as `"null"`.
    #[tokio::test]
    async fn decodes_orders_as_the_backend_renders_them() {
        let transport = Arc::new(InMemoryTransport::new());
        let client = RemoteClient::new(transport.clone());
        transport.on(
            Method::Get,
            ALL,
            Reply::ok(json!([
                {
                    "order_id": "1",
                    "name": "Tomatoes",
                    "category": "Produce",
                    "supplier": "Green Valley Farms",
                    "created": "2026-10-01",
                    "delivery": "null",
                    "status": "Requested",
                    "quantity": "20.00",
                    "unit": "Kg",
                    "price": "45.50"
                },
                {
                    "order_id": "2",
                    "name": "Flour",
                    "category": "Pantry",
                    "supplier": "Golden Mill",
                    "created": "2026-09-20",
                    "delivery": "2026-09-25",
                    "status": "Delivered",
                    "quantity": "50",
                    "unit": "Kg",
                    "price": "80.00"
                }
            ])),
        );

        let fetched = all(&client, ConnectivityState::Online).await;

        assert!(fetched.is_live(), "{:?}", fetched.reason());
        let orders = fetched.into_data();
        assert_eq!(orders[0].delivery, None);
        assert_eq!(orders[0].quantity, rust_decimal::Decimal::new(2000, 2));
        assert_eq!(orders[1].delivery, chrono::NaiveDate::from_ymd_opt(2026, 9, 25));
        assert_eq!(orders[1].price, rust_decimal::Decimal::new(8000, 2));
    }

    #[tokio::test]
    async fn update_puts_full_order() {
        let transport = Arc::new(InMemoryTransport::new());
        let client = RemoteClient::new(transport.clone());
        let order = fallback::orders().remove(0);
        transport.on(Method::Put, UPDATE, Reply::ok(serde_json::to_value(&order).unwrap()));

        let saved = update(&client, &order).await.unwrap();

        assert_eq!(saved, order);
        let sent = transport.requests().remove(0).body.unwrap();
        assert_eq!(sent["order_id"], json!(order.id.as_str()));
    }

    #[tokio::test]
    async fn server_rejection_is_not_a_fallback() {
        let transport = Arc::new(InMemoryTransport::new());
        let client = RemoteClient::new(transport.clone());
        transport.on(Method::Post, SAVE, Reply::Json(422, json!({ "message": "price missing" })));

        let draft = OrderDraft {
            name: "Flour".into(),
            category: "Pantry".into(),
            supplier: "Golden Mill".into(),
            created: chrono::NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            delivery: chrono::NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
            status: "Requested".into(),
            quantity: Decimal::new(25, 0),
            unit: "Kg".into(),
            price: Decimal::new(4000, 2),
        };

        let err = save(&client, &draft).await.unwrap_err();
        assert_eq!(err.to_string(), "POST /order/save: price missing");
    }
}
