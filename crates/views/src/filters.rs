//! Local filter state.
//!
//! Filters are pure functions of (collection, filter state). They never
//! trigger a fetch and apply equally to live and fallback data.

use std::collections::BTreeSet;
use std::str::FromStr;

use larder_core::{DomainError, InventoryItem, InventoryStatus, Order, OrderStatus, Recipe, Supplier, SupplierStatus};

/// The inventory status checkboxes, including the "All Items" toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    all: bool,
    selected: BTreeSet<InventoryStatus>,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self {
            all: true,
            selected: BTreeSet::new(),
        }
    }
}

impl StatusFilter {
    /// Statuses offered as individual checkboxes.
    pub fn options() -> [InventoryStatus; 3] {
        [
            InventoryStatus::LowStock,
            InventoryStatus::ExpiringSoon,
            InventoryStatus::OutOfStock,
        ]
    }

    pub fn only(statuses: impl IntoIterator<Item = InventoryStatus>) -> Self {
        let selected: BTreeSet<_> = statuses.into_iter().collect();
        Self {
            all: selected.is_empty(),
            selected,
        }
    }

    pub fn shows_all(&self) -> bool {
        self.all
    }

    pub fn is_selected(&self, status: &InventoryStatus) -> bool {
        self.selected.contains(status)
    }

    /// Flip "All Items" and clear every individual status.
    pub fn toggle_all(&mut self) {
        self.all = !self.all;
        self.selected.clear();
    }

    /// Flip one status. Selecting any status turns "All Items" off; clearing
    /// the last one turns it back on.
    pub fn toggle(&mut self, status: InventoryStatus) {
        if !self.selected.remove(&status) {
            self.selected.insert(status);
        }
        self.all = self.selected.is_empty();
    }

    pub fn admits(&self, status: &InventoryStatus) -> bool {
        self.all || self.selected.contains(status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        item.matches(&self.search.trim().to_lowercase()) && self.status.admits(&item.status)
    }

    pub fn apply<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OrderTab {
    #[default]
    All,
    Requested,
    Delivered,
}

impl OrderTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderTab::All => "all",
            OrderTab::Requested => "requested",
            OrderTab::Delivered => "delivered",
        }
    }

    pub fn admits(&self, status: &OrderStatus) -> bool {
        match self {
            OrderTab::All => true,
            OrderTab::Requested => *status == OrderStatus::Requested,
            OrderTab::Delivered => *status == OrderStatus::Delivered,
        }
    }
}

impl FromStr for OrderTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(OrderTab::All),
            "requested" => Ok(OrderTab::Requested),
            "delivered" => Ok(OrderTab::Delivered),
            other => Err(DomainError::validation(format!("unknown order tab '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub search: String,
    pub tab: OrderTab,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        order.matches(&self.search.trim().to_lowercase()) && self.tab.admits(&order.status)
    }

    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFilter {
    pub search: String,
    /// `None` shows every status.
    pub status: Option<SupplierStatus>,
}

impl SupplierFilter {
    /// Selecting the active status again clears it.
    pub fn toggle_status(&mut self, status: SupplierStatus) {
        self.status = match self.status.take() {
            Some(current) if current == status => None,
            _ => Some(status),
        };
    }

    pub fn matches(&self, supplier: &Supplier) -> bool {
        supplier.matches(&self.search.trim().to_lowercase())
            && self.status.as_ref().is_none_or(|status| *status == supplier.status)
    }

    pub fn apply<'a>(&self, suppliers: &'a [Supplier]) -> Vec<&'a Supplier> {
        suppliers.iter().filter(|supplier| self.matches(supplier)).collect()
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RecipeTab {
    #[default]
    All,
    Popular,
    Recent,
}

impl RecipeTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeTab::All => "all",
            RecipeTab::Popular => "popular",
            RecipeTab::Recent => "recent",
        }
    }

    pub fn admits(&self, recipe: &Recipe) -> bool {
        match self {
            RecipeTab::All => true,
            RecipeTab::Popular => recipe.popular,
            RecipeTab::Recent => recipe.is_recent(),
        }
    }
}

impl FromStr for RecipeTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(RecipeTab::All),
            "popular" => Ok(RecipeTab::Popular),
            "recent" => Ok(RecipeTab::Recent),
            other => Err(DomainError::validation(format!("unknown recipe tab '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub search: String,
    pub tab: RecipeTab,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        recipe.matches(&self.search.trim().to_lowercase()) && self.tab.admits(recipe)
    }

    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::{InventoryId, fallback};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn statuses() -> impl Strategy<Value = InventoryStatus> {
        prop_oneof![
            Just(InventoryStatus::InStock),
            Just(InventoryStatus::LowStock),
            Just(InventoryStatus::OutOfStock),
            Just(InventoryStatus::ExpiringSoon),
            "[a-z]{1,6}".prop_map(InventoryStatus::from),
        ]
    }

    fn items() -> impl Strategy<Value = Vec<InventoryItem>> {
        prop::collection::vec(("[A-Za-z ]{0,10}", "[A-Za-z]{0,8}", statuses()), 0..12).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, category, status))| InventoryItem {
                    id: InventoryId::new(i as i64),
                    name,
                    category,
                    quantity: Decimal::ONE,
                    unit: "Kg".into(),
                    status,
                    expires_on: None,
                })
                .collect()
        })
    }

    fn filters() -> impl Strategy<Value = InventoryFilter> {
        ("[A-Za-z ]{0,3}", prop::collection::vec(statuses(), 0..4), any::<bool>()).prop_map(
            |(search, selected, flip_all)| {
                let mut status = StatusFilter::only(selected);
                if flip_all {
                    status.toggle_all();
                }
                InventoryFilter { search, status }
            },
        )
    }

    proptest! {
        #[test]
        fn inventory_filter_is_idempotent(items in items(), filter in filters()) {
            let once: Vec<InventoryItem> = filter.apply(&items).into_iter().cloned().collect();
            let twice: Vec<InventoryItem> = filter.apply(&once).into_iter().cloned().collect();
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(filter.apply(&items), filter.apply(&items));
        }
    }

    #[test]
    fn all_items_toggle_rules() {
        let mut filter = StatusFilter::default();
        assert!(filter.shows_all());

        filter.toggle(InventoryStatus::LowStock);
        assert!(!filter.shows_all());
        assert!(filter.admits(&InventoryStatus::LowStock));
        assert!(!filter.admits(&InventoryStatus::InStock));

        filter.toggle(InventoryStatus::LowStock);
        assert!(filter.shows_all(), "clearing the last status re-enables all");

        filter.toggle(InventoryStatus::OutOfStock);
        filter.toggle_all();
        assert!(filter.shows_all());
        assert!(!filter.is_selected(&InventoryStatus::OutOfStock));

        filter.toggle_all();
        assert!(!filter.admits(&InventoryStatus::InStock), "nothing checked shows nothing");
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_category() {
        let items = fallback::inventory_items();
        let filter = InventoryFilter {
            search: "  DAIRY ".into(),
            status: StatusFilter::default(),
        };

        let hits = filter.apply(&items);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|i| i.category == "Dairy" || i.name.to_lowercase().contains("dairy")));
    }

    #[test]
    fn order_tabs_and_search() {
        let orders = fallback::orders();
        let delivered = OrderFilter {
            search: String::new(),
            tab: OrderTab::Delivered,
        };
        assert!(delivered.apply(&orders).iter().all(|o| o.status == OrderStatus::Delivered));

        let by_supplier = OrderFilter {
            search: orders[0].supplier.to_uppercase(),
            tab: OrderTab::All,
        };
        assert!(by_supplier.apply(&orders).contains(&&orders[0]));
        assert_eq!("Requested".parse::<OrderTab>().unwrap(), OrderTab::Requested);
        assert!("pending".parse::<OrderTab>().is_err());
    }

    #[test]
    fn supplier_status_toggles_off() {
        let mut filter = SupplierFilter::default();
        filter.toggle_status(SupplierStatus::Active);
        assert_eq!(filter.status, Some(SupplierStatus::Active));
        filter.toggle_status(SupplierStatus::Pending);
        assert_eq!(filter.status, Some(SupplierStatus::Pending));
        filter.toggle_status(SupplierStatus::Pending);
        assert_eq!(filter.status, None);

        let suppliers = fallback::suppliers();
        assert_eq!(filter.apply(&suppliers).len(), suppliers.len());
    }

    #[test]
    fn recipe_tabs() {
        let recipes = fallback::recipes();
        let popular = RecipeFilter {
            search: String::new(),
            tab: RecipeTab::Popular,
        };
        let recent = RecipeFilter {
            search: String::new(),
            tab: RecipeTab::Recent,
        };

        assert!(popular.apply(&recipes).iter().all(|r| r.popular));
        assert!(recent.apply(&recipes).iter().all(|r| r.is_recent()));
    }
}
