//! Inventory list and item detail.

use larder_client::api::inventory;
use larder_core::{InventoryId, InventoryItem};

use crate::context::ViewContext;
use crate::filters::InventoryFilter;
use crate::forms::{FormError, InventoryForm};
use crate::scope::MountScope;
use crate::state::{Notice, ViewState};

pub struct InventoryOverview {
    ctx: ViewContext,
    scope: MountScope,
    state: ViewState<Vec<InventoryItem>>,
    pub filter: InventoryFilter,
    form: InventoryForm,
    form_open: bool,
    notice: Option<Notice>,
}

impl InventoryOverview {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: MountScope::new(),
            state: ViewState::default(),
            filter: InventoryFilter::default(),
            form: InventoryForm::default(),
            form_open: false,
            notice: None,
        }
    }

    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    pub fn state(&self) -> &ViewState<Vec<InventoryItem>> {
        &self.state
    }

    /// Rows after search and status filters.
    pub fn visible(&self) -> Vec<&InventoryItem> {
        self.filter.apply(self.state.data())
    }

    /// Latest mutation or validation message.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn form(&self) -> &InventoryForm {
        &self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) -> &mut InventoryForm {
        self.form_open = true;
        &mut self.form
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub async fn refresh(&mut self) {
        let checkpoint = self.state.begin();
        let fetch = inventory::all(self.ctx.client(), self.ctx.connectivity());
        match self.scope.guard(fetch).await {
            Some(fetched) => self.state.apply(fetched),
            None => self.state.restore(checkpoint),
        }
    }

    /// Validate, save, then re-fetch the whole list.
    ///
    /// On failure the form stays open with what was typed.
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
            .guard(inventory::save(self.ctx.client(), &draft))
            .await
            .ok_or(FormError::Unmounted)?;

        match saved {
            Ok(item) => {
                tracing::info!(id = %item.id, name = %item.name, "inventory item saved");
                self.notice = Some(Notice::success(
                    "Item added",
                    format!("{} has been added to inventory", draft.name),
                ));
                self.form_open = false;
                self.form = InventoryForm::default();
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", "Failed to add inventory item"));
                Err(err.into())
            }
        }
    }

    /// Delete one item, then re-fetch.
    pub async fn delete(&mut self, id: InventoryId) -> Result<(), FormError> {
        let deleted = self
            .scope
            .guard(inventory::delete(self.ctx.client(), id))
            .await
            .ok_or(FormError::Unmounted)?;

        match deleted {
            Ok(()) => {
                self.notice = Some(Notice::success("Item removed", format!("Item {id} has been removed")));
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", "Failed to remove inventory item"));
                Err(err.into())
            }
        }
    }
}

/// One item, addressed by id.
pub struct InventoryDetail {
    ctx: ViewContext,
    scope: MountScope,
    id: InventoryId,
    state: ViewState<Option<InventoryItem>>,
    notice: Option<Notice>,
}

impl InventoryDetail {
    pub fn new(ctx: ViewContext, id: InventoryId) -> Self {
        Self {
            ctx,
            scope: MountScope::new(),
            id,
            state: ViewState::default(),
            notice: None,
        }
    }

    pub fn id(&self) -> InventoryId {
        self.id
    }

    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    /// `None` data means the item is unknown to both server and fallback set.
    pub fn state(&self) -> &ViewState<Option<InventoryItem>> {
        &self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self) {
        let checkpoint = self.state.begin();
        let fetch = inventory::by_id(self.ctx.client(), self.ctx.connectivity(), self.id);
        match self.scope.guard(fetch).await {
            Some(fetched) => self.state.apply(fetched),
            None => self.state.restore(checkpoint),
        }
    }

    /// Send a modified copy of the item, then re-fetch it.
    pub async fn update(&mut self, item: InventoryItem) -> Result<(), FormError> {
        if item.id != self.id {
            return Err(FormError::NothingSelected);
        }

        let updated = self
            .scope
            .guard(inventory::update(self.ctx.client(), &item))
            .await
            .ok_or(FormError::Unmounted)?;

        match updated {
            Ok(_) => {
                self.notice = Some(Notice::success("Success", "Item updated successfully"));
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", "Failed to update item"));
                Err(err.into())
            }
        }
    }
}
