//! Input forms: raw text as typed, validated into drafts before any call.

use std::str::FromStr;

use chrono::NaiveDate;
use larder_client::ClientError;
use larder_core::order::OrderEdits;
use larder_core::{
    Alert, Categories, DomainError, DomainResult, InventoryDraft, InventoryStatus, Order, OrderDraft,
    OrderStatus, Recipe, SupplierDraft, SupplierStatus,
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Why a submission did not complete.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    /// Rejected locally; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Remote(#[from] ClientError),

    #[error("no record selected for editing")]
    NothingSelected,

    /// The view went away before the call finished.
    #[error("view unmounted")]
    Unmounted,
}

fn parse_decimal(field: &str, raw: &str) -> DomainResult<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|_| DomainError::validation(format!("{field} must be a number, got '{}'", raw.trim())))
}

fn parse_date(field: &str, raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::validation(format!("{field} must be a YYYY-MM-DD date, got '{}'", raw.trim())))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: String,
    pub status: InventoryStatus,
    pub exp_date: String,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: "Dairy".to_string(),
            quantity: String::new(),
            unit: "Kg".to_string(),
            status: InventoryStatus::InStock,
            exp_date: String::new(),
        }
    }
}

impl InventoryForm {
    pub fn validate(&self) -> DomainResult<InventoryDraft> {
        DomainError::require(&[
            ("name", self.name.as_str()),
            ("category", self.category.as_str()),
            ("quantity", self.quantity.as_str()),
            ("exp_date", self.exp_date.as_str()),
        ])?;

        Ok(InventoryDraft {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            quantity: parse_decimal("quantity", self.quantity.as_str())?,
            unit: self.unit.trim().to_string(),
            status: self.status.clone(),
            exp_date: parse_date("exp_date", self.exp_date.as_str())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub created: NaiveDate,
    pub delivery: String,
    pub status: OrderStatus,
    pub quantity: String,
    pub unit: String,
    pub price: String,
}

impl OrderForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            category: "Pantry".to_string(),
            supplier: String::new(),
            created: today,
            delivery: String::new(),
            status: OrderStatus::Requested,
            quantity: String::new(),
            unit: "Kg".to_string(),
            price: String::new(),
        }
    }

    /// Reorder form pre-filled from an alert's item.
    pub fn for_alert(alert: &Alert, today: NaiveDate) -> Self {
        Self {
            name: alert.item.name.clone(),
            category: alert.item.category.clone(),
            quantity: alert.kind.reorder_quantity().to_string(),
            unit: alert.item.unit.clone(),
            ..Self::new(today)
        }
    }

    pub fn validate(&self) -> DomainResult<OrderDraft> {
        DomainError::require(&[
            ("name", self.name.as_str()),
            ("category", self.category.as_str()),
            ("supplier", self.supplier.as_str()),
            ("delivery", self.delivery.as_str()),
            ("quantity", self.quantity.as_str()),
            ("price", self.price.as_str()),
        ])?;

        Ok(OrderDraft {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            supplier: self.supplier.trim().to_string(),
            created: self.created,
            delivery: parse_date("delivery", self.delivery.as_str())?,
            status: self.status.clone(),
            quantity: parse_decimal("quantity", self.quantity.as_str())?,
            unit: self.unit.trim().to_string(),
            price: parse_decimal("price", self.price.as_str())?,
        })
    }
}

/// Edits to an existing order. Only status, delivery, quantity and price are
/// exposed; everything else is carried over from the original record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEditForm {
    order: Order,
    pub status: OrderStatus,
    /// Blank means "to be determined".
    pub delivery: String,
    pub quantity: String,
    pub price: String,
}

impl OrderEditForm {
    pub fn from_order(order: Order) -> Self {
        Self {
            status: order.status.clone(),
            delivery: order.delivery.map(|d| d.to_string()).unwrap_or_default(),
            quantity: order.quantity.to_string(),
            price: order.price.to_string(),
            order,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// The full record to send, original identity and creation fields intact.
    pub fn validate(&self) -> DomainResult<Order> {
        DomainError::require(&[("quantity", self.quantity.as_str()), ("price", self.price.as_str())])?;

        let delivery = match self.delivery.trim() {
            "" => None,
            raw => Some(parse_date("delivery", raw)?),
        };

        Ok(self.order.with_edits(OrderEdits {
            status: self.status.clone(),
            delivery,
            quantity: parse_decimal("quantity", self.quantity.as_str())?,
            price: parse_decimal("price", self.price.as_str())?,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierForm {
    pub company: String,
    pub contact_person: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub status: SupplierStatus,
    pub categories: Categories,
}

impl Default for SupplierForm {
    fn default() -> Self {
        Self {
            company: String::new(),
            contact_person: String::new(),
            email: String::new(),
            mobile: String::new(),
            address: String::new(),
            status: SupplierStatus::Active,
            categories: Categories::new(),
        }
    }
}

impl SupplierForm {
    pub fn toggle_category(&mut self, category: &str) {
        self.categories.toggle(category);
    }

    pub fn validate(&self) -> DomainResult<SupplierDraft> {
        DomainError::require(&[
            ("company", self.company.as_str()),
            ("email", self.email.as_str()),
            ("mobile", self.mobile.as_str()),
        ])?;

        Ok(SupplierDraft {
            company: self.company.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            email: self.email.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            address: self.address.trim().to_string(),
            status: self.status.clone(),
            categories: self.categories.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    pub name: String,
    pub category: String,
    /// Minutes.
    pub prep_time: String,
    pub description: String,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: "Main Course".to_string(),
            prep_time: String::new(),
            description: String::new(),
        }
    }
}

impl RecipeForm {
    pub fn validate(&self, id: impl Into<String>) -> DomainResult<Recipe> {
        DomainError::require(&[
            ("name", self.name.as_str()),
            ("category", self.category.as_str()),
            ("prep_time", self.prep_time.as_str()),
        ])?;

        let prep_time = self.prep_time.trim().parse::<u32>().map_err(|_| {
            DomainError::validation(format!("prep_time must be whole minutes, got '{}'", self.prep_time.trim()))
        })?;

        Ok(Recipe {
            id: id.into(),
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            prep_time,
            ingredients: 0,
            last_used: "Today".to_string(),
            popular: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::{AlertKind, fallback};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn inventory_defaults_and_validation() {
        let mut form = InventoryForm::default();
        assert_eq!(form.category, "Dairy");
        assert_eq!(form.unit, "Kg");
        assert_eq!(form.status, InventoryStatus::InStock);

        assert_eq!(
            form.validate(),
            Err(DomainError::MissingFields(vec!["name", "quantity", "exp_date"]))
        );

        form.name = "Butter".into();
        form.quantity = "3.5".into();
        form.exp_date = "2026-12-01".into();
        let draft = form.validate().unwrap();
        assert_eq!(draft.quantity, Decimal::new(35, 1));

        form.quantity = "lots".into();
        assert!(matches!(form.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn order_form_prefills_from_alert() {
        let out = larder_core::Alert::from_item(AlertKind::OutOfStock, fallback::inventory_items()[0].clone());
        let low = larder_core::Alert::from_item(AlertKind::LowStock, fallback::inventory_items()[1].clone());

        let form = OrderForm::for_alert(&out, today());
        assert_eq!(form.quantity, "10");
        assert_eq!(form.name, out.item.name);
        assert_eq!(form.unit, out.item.unit);
        assert_eq!(form.supplier, "");
        assert_eq!(form.created, today());
        assert_eq!(OrderForm::for_alert(&low, today()).quantity, "5");
    }

    #[test]
    fn order_form_requires_supplier_delivery_and_price() {
        let form = OrderForm {
            name: "Flour".into(),
            quantity: "20".into(),
            ..OrderForm::new(today())
        };
        assert_eq!(
            form.validate(),
            Err(DomainError::MissingFields(vec!["supplier", "delivery", "price"]))
        );
    }

    #[test]
    fn edit_form_only_changes_editable_fields() {
        let order = fallback::orders().remove(0);
        let mut form = OrderEditForm::from_order(order.clone());
        form.status = OrderStatus::Delivered;
        form.price = "99.90".into();
        form.delivery = String::new();

        let edited = form.validate().unwrap();

        assert_eq!(edited.id, order.id);
        assert_eq!(edited.created, order.created);
        assert_eq!(edited.supplier, order.supplier);
        assert_eq!(edited.status, OrderStatus::Delivered);
        assert_eq!(edited.price, Decimal::new(9990, 2));
        assert_eq!(edited.delivery, None);
    }

    #[test]
    fn supplier_form_requires_contact_channels() {
        let mut form = SupplierForm::default();
        form.company = "Green Acres".into();
        form.toggle_category("Produce");
        form.toggle_category("Dairy");
        form.toggle_category("Produce");

        assert_eq!(
            form.validate(),
            Err(DomainError::MissingFields(vec!["email", "mobile"]))
        );

        form.email = "hi@greenacres.example".into();
        form.mobile = "555-0199".into();
        assert_eq!(form.validate().unwrap().categories.join(), "Dairy");
    }

    #[test]
    fn recipe_prep_time_is_minutes() {
        let mut form = RecipeForm::default();
        assert_eq!(form.category, "Main Course");
        form.name = "Risotto".into();
        form.prep_time = "forty".into();
        assert!(matches!(form.validate("r-7"), Err(DomainError::Validation(_))));

        form.prep_time = "40".into();
        assert_eq!(form.validate("r-7").unwrap().prep_time, 40);
    }
}
