//! Dashboard counters.

use larder_client::api::inventory;
use larder_core::InventoryStats;

use crate::context::ViewContext;
use crate::scope::MountScope;
use crate::state::ViewState;

/// Available items, low stock, expiring soon and inventory value.
///
/// The four counters load together; if any one fails, all four show fallback
/// figures.
pub struct DashboardStats {
    ctx: ViewContext,
    scope: MountScope,
    state: ViewState<InventoryStats>,
}

impl DashboardStats {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: MountScope::new(),
            state: ViewState::default(),
        }
    }

    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    pub fn state(&self) -> &ViewState<InventoryStats> {
        &self.state
    }

    pub async fn refresh(&mut self) {
        let checkpoint = self.state.begin();
        let fetch = inventory::stats(self.ctx.client(), self.ctx.connectivity());
        match self.scope.guard(fetch).await {
            Some(fetched) => self.state.apply(fetched),
            None => self.state.restore(checkpoint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use larder_client::api::orders;
    use larder_client::{InMemoryTransport, Method, RemoteClient, Reply};
    use larder_core::fallback;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn counters_start_at_zero_before_the_first_refresh() {
        let stats = DashboardStats::new(ViewContext::new(RemoteClient::new(Arc::new(InMemoryTransport::new()))));

        assert_eq!(stats.state().phase(), Phase::Idle);
        assert_eq!(stats.state().data(), &larder_core::InventoryStats::default());
        assert_eq!(stats.state().data().inventory_value, rust_decimal::Decimal::ZERO);
    }

    #[tokio::test]
    async fn counters_load_together() {
        let transport = Arc::new(InMemoryTransport::new());
        transport
            .on(Method::Get, inventory::AVAILABLE_COUNT, Reply::ok(json!(40)))
            .on(Method::Get, inventory::LOW_STOCK_COUNT, Reply::ok(json!(3)))
            .on(Method::Get, inventory::EXPIRING_SOON_COUNT, Reply::ok(json!(1)))
            .on(Method::Get, orders::INVENTORY_VALUE, Reply::ok(json!("812.40")));
        let mut stats = DashboardStats::new(ViewContext::new(RemoteClient::new(transport.clone())));

        stats.refresh().await;

        assert_eq!(stats.state().phase(), Phase::Ready);
        assert_eq!(stats.state().data().available, 40);

        transport.on(Method::Get, orders::INVENTORY_VALUE, Reply::status(500));
        stats.refresh().await;

        assert_eq!(stats.state().phase(), Phase::Failed);
        assert_eq!(stats.state().data(), &fallback::inventory_stats());
    }
}
