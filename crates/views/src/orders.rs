//! Orders list with create and edit forms.

use larder_client::api::{orders, suppliers};
use larder_core::{Order, OrderId, SupplierName};

use crate::context::ViewContext;
use crate::filters::OrderFilter;
use crate::forms::{FormError, OrderEditForm, OrderForm};
use crate::scope::MountScope;
use crate::state::{Notice, ViewState};

pub struct OrdersList {
    ctx: ViewContext,
    scope: MountScope,
    state: ViewState<Vec<Order>>,
    supplier_names: ViewState<Vec<SupplierName>>,
    pub filter: OrderFilter,
    form: OrderForm,
    form_open: bool,
    editing: Option<OrderEditForm>,
    notice: Option<Notice>,
}

impl OrdersList {
    pub fn new(ctx: ViewContext) -> Self {
        let form = OrderForm::new(ctx.today());
        Self {
            ctx,
            scope: MountScope::new(),
            state: ViewState::default(),
            supplier_names: ViewState::default(),
            filter: OrderFilter::default(),
            form,
            form_open: false,
            editing: None,
            notice: None,
        }
    }

    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    pub fn state(&self) -> &ViewState<Vec<Order>> {
        &self.state
    }

    pub fn visible(&self) -> Vec<&Order> {
        self.filter.apply(self.state.data())
    }

    /// Options for the supplier picker. Orders reference suppliers by
    /// company name, so these are names, not ids.
    pub fn supplier_names(&self) -> &[SupplierName] {
        self.supplier_names.data()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) -> &mut OrderForm {
        self.form_open = true;
        &mut self.form
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub fn editing(&self) -> Option<&OrderEditForm> {
        self.editing.as_ref()
    }

    /// Open the edit form for one order of the current collection.
    pub fn begin_edit(&mut self, id: &OrderId) -> Option<&mut OrderEditForm> {
        let order = self.state.find(id)?.clone();
        self.editing = Some(OrderEditForm::from_order(order));
        self.editing.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Orders, then supplier names for the picker. A failed name lookup
    /// falls back on its own and does not fail the list.
    pub async fn refresh(&mut self) {
        let checkpoint = self.state.begin();
        let fetch = orders::all(self.ctx.client(), self.ctx.connectivity());
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

    pub async fn submit(&mut self) -> Result<(), FormError> {
        let draft = match self.form.validate() {
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
                tracing::info!(id = %order.id, supplier = %order.supplier, "order created");
                self.notice = Some(Notice::success(
                    "Success",
                    format!("Order for {} has been created", draft.name),
                ));
                self.form_open = false;
                self.form = OrderForm::new(self.ctx.today());
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", "Failed to create order"));
                Err(err.into())
            }
        }
    }

    /// Send the edited order, then re-fetch the list.
    pub async fn save_edit(&mut self) -> Result<(), FormError> {
        let Some(editing) = &self.editing else {
            return Err(FormError::NothingSelected);
        };
        let order = match editing.validate() {
            Ok(order) => order,
            Err(err) => {
                self.notice = Some(Notice::invalid(&err));
                return Err(err.into());
            }
        };

        let updated = self
            .scope
            .guard(orders::update(self.ctx.client(), &order))
            .await
            .ok_or(FormError::Unmounted)?;

        match updated {
            Ok(_) => {
                tracing::info!(id = %order.id, status = %order.status, "order updated");
                self.notice = Some(Notice::success("Success", "Order updated successfully"));
                self.editing = None;
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", "Failed to update order"));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::OrderTab;
    use crate::state::Phase;
    use chrono::NaiveDate;
    use larder_client::{InMemoryTransport, Method, RemoteClient, Reply};
    use larder_core::{OrderStatus, fallback};
    use serde_json::json;
    use std::sync::Arc;

    fn list(transport: &Arc<InMemoryTransport>) -> OrdersList {
        let ctx = ViewContext::new(RemoteClient::new(transport.clone()))
            .with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        OrdersList::new(ctx)
    }

    fn wire(orders: &[Order]) -> serde_json::Value {
        serde_json::to_value(orders).unwrap()
    }

    #[tokio::test]
    async fn names_failure_does_not_fail_the_list() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.on(Method::Get, orders::ALL, Reply::ok(wire(&fallback::orders()[..2])));
        let mut view = list(&transport);

        view.refresh().await;

        assert_eq!(view.state().phase(), Phase::Ready);
        assert_eq!(view.state().data().len(), 2);
        assert_eq!(view.supplier_names(), fallback::supplier_names().as_slice());
    }

    #[tokio::test]
    async fn create_resets_form_with_today() {
        let transport = Arc::new(InMemoryTransport::new());
        let created = fallback::orders().remove(0);
        transport
            .on(Method::Post, orders::SAVE, Reply::ok(serde_json::to_value(&created).unwrap()))
            .on(Method::Get, orders::ALL, Reply::ok(wire(&[created.clone()])))
            .on(Method::Get, suppliers::NAMES, Reply::ok(json!([{ "company": "Golden Mill" }])));
        let mut view = list(&transport);

        let form = view.open_form();
        form.name = "Flour".into();
        form.supplier = "Golden Mill".into();
        form.delivery = "2026-10-25".into();
        form.quantity = "25".into();
        form.price = "40.00".into();
        view.submit().await.unwrap();

        assert_eq!(
            transport.calls(),
            vec!["POST /order/save", "GET /order/getAll", "GET /supplier/names"]
        );
        assert_eq!(view.form(), &OrderForm::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()));
        assert_eq!(view.supplier_names()[0].company, "Golden Mill");
    }

    #[tokio::test]
    async fn edit_sends_full_record_then_refetches() {
        let transport = Arc::new(InMemoryTransport::new());
        let orders_wire = wire(&fallback::orders());
        transport
            .on(Method::Get, orders::ALL, Reply::ok(orders_wire.clone()))
            .on(Method::Get, suppliers::NAMES, Reply::ok(json!([])))
            .on(Method::Put, orders::UPDATE, Reply::ok(orders_wire[0].clone()));
        let mut view = list(&transport);
        view.refresh().await;
        transport.clear_log();

        let target = view.state().data()[0].clone();
        let edit = view.begin_edit(&target.id).unwrap();
        edit.status = OrderStatus::Delivered;
        view.save_edit().await.unwrap();

        let sent = transport.requests()[0].body.clone().unwrap();
        assert_eq!(sent["status"], json!("Delivered"));
        assert_eq!(sent["order_id"], json!(target.id.as_str()));
        assert_eq!(sent["supplier"], json!(target.supplier));
        assert_eq!(transport.calls()[..2], ["PUT /order/update", "GET /order/getAll"]);
        assert!(view.editing().is_none());
    }

    #[tokio::test]
    async fn save_edit_without_selection_is_rejected() {
        let transport = Arc::new(InMemoryTransport::new());
        let mut view = list(&transport);
        assert_eq!(view.save_edit().await, Err(FormError::NothingSelected));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn tabs_filter_the_held_collection() {
        let transport = Arc::new(InMemoryTransport::new());
        let mut view = list(&transport);
        view.refresh().await;

        view.filter.tab = OrderTab::Requested;

        assert!(view.visible().iter().all(|o| o.status == OrderStatus::Requested));
    }
}
