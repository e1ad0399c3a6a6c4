//! Suppliers list with the add-supplier form.

use larder_client::api::suppliers;
use larder_core::Supplier;

use crate::context::ViewContext;
use crate::filters::SupplierFilter;
use crate::forms::{FormError, SupplierForm};
use crate::scope::MountScope;
use crate::state::{Notice, ViewState};

pub struct SuppliersList {
    ctx: ViewContext,
    scope: MountScope,
    state: ViewState<Vec<Supplier>>,
    pub filter: SupplierFilter,
    form: SupplierForm,
    form_open: bool,
    notice: Option<Notice>,
}

impl SuppliersList {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: MountScope::new(),
            state: ViewState::default(),
            filter: SupplierFilter::default(),
            form: SupplierForm::default(),
            form_open: false,
            notice: None,
        }
    }

    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    pub fn state(&self) -> &ViewState<Vec<Supplier>> {
        &self.state
    }

    pub fn visible(&self) -> Vec<&Supplier> {
        self.filter.apply(self.state.data())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn form(&self) -> &SupplierForm {
        &self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) -> &mut SupplierForm {
        self.form_open = true;
        &mut self.form
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub async fn refresh(&mut self) {
        let checkpoint = self.state.begin();
        let fetch = suppliers::all(self.ctx.client(), self.ctx.connectivity());
        match self.scope.guard(fetch).await {
            Some(fetched) => self.state.apply(fetched),
            None => self.state.restore(checkpoint),
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
            .guard(suppliers::save(self.ctx.client(), &draft))
            .await
            .ok_or(FormError::Unmounted)?;

        match saved {
            Ok(supplier) => {
                tracing::info!(id = %supplier.id, company = %supplier.company, "supplier added");
                self.notice = Some(Notice::success(
                    "Success",
                    format!("{} has been added to your suppliers", draft.company),
                ));
                self.form_open = false;
                self.form = SupplierForm::default();
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", "Failed to add supplier"));
                Err(err.into())
            }
        }
    }
}
