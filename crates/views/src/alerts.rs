//! Alerts panel: three stock sources merged into one list.

use larder_client::api::{inventory, orders, suppliers};
use larder_core::{Alert, SupplierName};

use crate::context::ViewContext;
use crate::forms::{FormError, OrderForm};
use crate::scope::MountScope;
use crate::state::{Notice, ViewState};

/// Alerts are derived client-side and never persisted, so dismissing one
/// only hides it until the next refresh.
pub struct AlertsPanel {
    ctx: ViewContext,
    scope: MountScope,
    state: ViewState<Vec<Alert>>,
    supplier_names: ViewState<Vec<SupplierName>>,
    order: Option<OrderForm>,
    notice: Option<Notice>,
}

impl AlertsPanel {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: MountScope::new(),
            state: ViewState::default(),
            supplier_names: ViewState::default(),
            order: None,
            notice: None,
        }
    }

    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    pub fn state(&self) -> &ViewState<Vec<Alert>> {
        &self.state
    }

    pub fn supplier_names(&self) -> &[SupplierName] {
        self.supplier_names.data()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The reorder form opened by [`take_action`](Self::take_action).
    pub fn order_form(&self) -> Option<&OrderForm> {
        self.order.as_ref()
    }

    pub fn order_form_mut(&mut self) -> Option<&mut OrderForm> {
        self.order.as_mut()
    }

    pub fn close_order_form(&mut self) {
        self.order = None;
    }

    pub async fn refresh(&mut self) {
        let checkpoint = self.state.begin();
        let fetch = inventory::alerts(self.ctx.client(), self.ctx.connectivity());
        match self.scope.guard(fetch).await {
            Some(fetched) => self.state.apply(fetched),
            None => {
                self.state.restore(checkpoint);
                return;
            }
        }

        let checkpoint = self.supplier_names.begin();
        let fetch = suppliers::names(self.ctx.client(), self.ctx.connectivity());
        match self.scope.guard(fetch).await {
            Some(fetched) => self.supplier_names.apply(fetched),
            None => self.supplier_names.restore(checkpoint),
        }
    }

    /// Remove an alert from the current list. No network effect.
    pub fn dismiss(&mut self, id: &str) -> bool {
        self.state.remove(id)
    }

    /// Open a reorder form pre-filled from the alert's item.
    pub fn take_action(&mut self, id: &str) -> Option<&mut OrderForm> {
        let alert = self.state.find(id)?;
        self.order = Some(OrderForm::for_alert(alert, self.ctx.today()));
        self.order.as_mut()
    }

    /// Place the reorder, then re-fetch the alerts.
    pub async fn submit_order(&mut self) -> Result<(), FormError> {
        let Some(form) = &self.order else {
            return Err(FormError::NothingSelected);
        };
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(err) => {
                self.notice = Some(Notice::invalid(&err));
                return Err(err.into());
            }
        };

        let saved = self
            .scope
            .guard(orders::save(self.ctx.client(), &draft))
            .await
            .ok_or(FormError::Unmounted)?;

        match saved {
            Ok(order) => {
                tracing::info!(id = %order.id, name = %order.name, "reorder placed from alert");
                self.notice = Some(Notice::success("Success", "Order created successfully"));
                self.order = None;
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", "Failed to create order. Please try again."));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use larder_client::{FallbackReason, InMemoryTransport, Method, RemoteClient, Reply};
    use larder_core::{AlertKind, fallback};
    use serde_json::json;
    use std::sync::Arc;

    fn row(id: i64, status: &str) -> serde_json::Value {
        json!({
            "inventory_id": id,
            "name": format!("Item {id}"),
            "category": "Produce",
            "quantity": 1,
            "unit": "Kg",
            "status": status,
            "exp_date": "2026-10-30"
        })
    }

    fn scripted() -> Arc<InMemoryTransport> {
        let transport = Arc::new(InMemoryTransport::new());
        transport
            .on(Method::Get, inventory::LOW_STOCK_ITEMS, Reply::ok(json!([row(1, "Low Stock")])))
            .on(Method::Get, inventory::EXPIRING_SOON_ITEMS, Reply::ok(json!([row(2, "Expiring Soon")])))
            .on(Method::Get, inventory::OUT_OF_STOCK_ITEMS, Reply::ok(json!([row(3, "Out of Stock")])))
            .on(Method::Get, suppliers::NAMES, Reply::ok(json!([{ "company": "Green Acres" }])));
        transport
    }

    fn panel(transport: &Arc<InMemoryTransport>) -> AlertsPanel {
        AlertsPanel::new(ViewContext::new(RemoteClient::new(transport.clone())))
    }

    #[tokio::test]
    async fn each_single_source_failure_fails_the_panel() {
        for failing in [
            inventory::LOW_STOCK_ITEMS,
            inventory::EXPIRING_SOON_ITEMS,
            inventory::OUT_OF_STOCK_ITEMS,
        ] {
            let transport = scripted();
            transport.on(Method::Get, failing, Reply::status(503));
            let mut view = panel(&transport);

            view.refresh().await;

            assert_eq!(view.state().phase(), Phase::Failed);
            assert_eq!(view.state().data(), &fallback::alerts());
            assert!(matches!(
                view.state().reason(),
                Some(FallbackReason::PartialAggregate { failed: 1, total: 3, .. })
            ));
        }
    }

    #[tokio::test]
    async fn dismissal_is_local_and_undone_by_refresh() {
        let transport = scripted();
        let mut view = panel(&transport);
        view.refresh().await;
        assert_eq!(view.state().data().len(), 3);
        let calls = transport.calls().len();

        assert!(view.dismiss("expiring_2"));
        assert!(!view.dismiss("expiring_2"));
        assert_eq!(view.state().data().len(), 2);
        assert_eq!(transport.calls().len(), calls);

        view.refresh().await;
        assert!(view.state().data().iter().any(|a| a.id == "expiring_2"));
    }

    #[tokio::test]
    async fn take_action_prefills_reorder() {
        let transport = scripted();
        let mut view = panel(&transport);
        view.refresh().await;

        let form = view.take_action("out_of_stock_3").unwrap();
        assert_eq!(form.quantity, "10");
        assert_eq!(form.name, "Item 3");

        let form = view.take_action("low_stock_1").unwrap();
        assert_eq!(form.quantity, AlertKind::LowStock.reorder_quantity().to_string());
        assert!(view.take_action("missing_9").is_none());
    }

    #[tokio::test]
    async fn reorder_posts_then_refetches() {
        let transport = scripted();
        let order = fallback::orders().remove(0);
        transport.on(Method::Post, orders::SAVE, Reply::ok(serde_json::to_value(&order).unwrap()));
        let mut view = panel(&transport);
        view.refresh().await;
        transport.clear_log();

        let form = view.take_action("low_stock_1").unwrap();
        form.supplier = "Green Acres".into();
        form.delivery = "2026-10-22".into();
        form.price = "12.00".into();
        view.submit_order().await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0], "POST /order/save");
        assert_eq!(calls.len(), 5, "save, three alert sources, supplier names");
        assert!(view.order_form().is_none());
    }
}
