//! Plain-text rendering of each screen.

use std::fmt::Display;

use larder_core::{
    Alert, Badge, InventoryItem, InventoryStats, InventoryStatus, Order, Recipe, Supplier, SupplierStatus, Tone,
};
use larder_views::{AnalyticsDashboard, Notice, NoticeLevel, ViewState};

/// Left-aligned columns padded to the widest cell.
struct Table {
    header: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(header: Vec<&'static str>) -> Self {
        Self { header, rows: Vec::new() }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn render(&self) -> String {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let line = |cells: Vec<&str>| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{cell:<w$}", w = *w))
                .collect();
            format!("{}\n", padded.join("  ").trim_end())
        };

        let mut out = line(self.header.clone());
        for row in &self.rows {
            out.push_str(&line(row.iter().map(String::as_str).collect()));
        }
        if self.rows.is_empty() {
            out.push_str("(nothing to show)\n");
        }
        out
    }
}

fn badge<T: Badge + Display>(value: &T) -> String {
    format!("{} {}", value.tone().marker(), value)
}

fn expiry(item: &InventoryItem) -> String {
    item.expires_on.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
}

fn notice_line(notice: Option<&Notice>) -> String {
    let Some(notice) = notice else {
        return String::new();
    };
    let tone = match notice.level {
        NoticeLevel::Info => Tone::Info,
        NoticeLevel::Success => Tone::Positive,
        NoticeLevel::Error => Tone::Critical,
    };
    format!("[{}] {}: {}\n", tone.marker(), notice.title, notice.message)
}

fn pick<T: Display>(raw: &str, known: Vec<T>) -> Result<T, String> {
    let normalise = |s: &str| {
        s.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect::<String>()
    };
    let wanted = normalise(raw);
    let labels: Vec<String> = known.iter().map(ToString::to_string).collect();
    known
        .into_iter()
        .find(|status| normalise(&status.to_string()) == wanted)
        .ok_or_else(|| format!("unknown status '{raw}', expected one of: {}", labels.join(", ")))
}

/// Accepts `low-stock`, `Low Stock`, `lowstock` and so on.
pub fn parse_inventory_status(raw: &str) -> Result<InventoryStatus, String> {
    pick(raw, InventoryStatus::known())
}

pub fn parse_supplier_status(raw: &str) -> Result<SupplierStatus, String> {
    pick(raw, SupplierStatus::known())
}

pub fn dashboard(state: &ViewState<InventoryStats>) -> String {
    let stats = state.data();
    let mut table = Table::new(vec!["counter", "value"]);
    table.row(vec!["available".into(), stats.available.to_string()]);
    table.row(vec!["low stock".into(), stats.low_stock.to_string()]);
    table.row(vec!["expiring soon".into(), stats.expiring_soon.to_string()]);
    table.row(vec!["inventory value".into(), format!("${}", stats.inventory_value)]);
    notice_line(state.banner()) + &table.render()
}

pub fn inventory(items: &[&InventoryItem], banner: Option<&Notice>) -> String {
    let mut table = Table::new(vec!["id", "name", "category", "quantity", "status", "expires"]);
    for item in items {
        table.row(vec![
            item.id.to_string(),
            item.name.clone(),
            item.category.clone(),
            format!("{} {}", item.quantity, item.unit),
            badge(&item.status),
            expiry(item),
        ]);
    }
    notice_line(banner) + &table.render()
}

pub fn item(item: Option<&InventoryItem>, banner: Option<&Notice>) -> String {
    let Some(item) = item else {
        return notice_line(banner) + "item not found\n";
    };
    let mut table = Table::new(vec!["field", "value"]);
    table.row(vec!["id".into(), item.id.to_string()]);
    table.row(vec!["name".into(), item.name.clone()]);
    table.row(vec!["category".into(), item.category.clone()]);
    table.row(vec!["quantity".into(), format!("{} {}", item.quantity, item.unit)]);
    table.row(vec!["status".into(), badge(&item.status)]);
    table.row(vec!["expires".into(), expiry(item)]);
    notice_line(banner) + &table.render()
}

pub fn orders(orders: &[&Order], banner: Option<&Notice>) -> String {
    let mut table = Table::new(vec!["id", "item", "supplier", "quantity", "price", "created", "delivery", "status"]);
    for order in orders {
        table.row(vec![
            order.id.to_string(),
            order.name.clone(),
            order.supplier.clone(),
            format!("{} {}", order.quantity, order.unit),
            format!("${}", order.price),
            order.created.to_string(),
            order.delivery.map(|d| d.to_string()).unwrap_or_else(|| "TBD".into()),
            badge(&order.status),
        ]);
    }
    notice_line(banner) + &table.render()
}

pub fn suppliers(suppliers: &[&Supplier], banner: Option<&Notice>) -> String {
    let mut table = Table::new(vec!["company", "contact", "email", "mobile", "categories", "status"]);
    for supplier in suppliers {
        table.row(vec![
            supplier.company.clone(),
            supplier.contact_person.clone(),
            supplier.email.clone(),
            supplier.mobile.clone(),
            supplier.categories.iter().collect::<Vec<_>>().join(", "),
            badge(&supplier.status),
        ]);
    }
    notice_line(banner) + &table.render()
}

pub fn alerts(alerts: &[Alert], banner: Option<&Notice>) -> String {
    let mut table = Table::new(vec!["priority", "alert", "details"]);
    for alert in alerts {
        table.row(vec![
            format!("{} {}", alert.priority.tone().marker(), alert.priority.as_str()),
            alert.title.clone(),
            alert.description.clone(),
        ]);
    }
    notice_line(banner) + &table.render()
}

pub fn analytics(view: &AnalyticsDashboard) -> String {
    let mut out = format!("timeframe: {}  backend: {}\n", view.timeframe(), view.connectivity().as_str());

    let summary = view.summary().data();
    out.push_str(&notice_line(view.summary().banner()));
    let mut table = Table::new(vec!["metric", "value", "change"]);
    table.row(vec![
        "total spent".into(),
        format!("${:.2}", summary.total_spent),
        format!("{:?} {:.1}%", summary.spending_trend, summary.spending_change),
    ]);
    table.row(vec!["items".into(), summary.total_items.to_string(), String::new()]);
    table.row(vec!["average cost".into(), format!("${:.2}", summary.average_cost), String::new()]);
    table.row(vec![
        "wastage".into(),
        format!("{:.1}%", summary.wastage_percentage),
        format!("{:?} {:.1}%", summary.waste_trend, summary.waste_change),
    ]);
    out.push_str(&table.render());

    out.push('\n');
    let mut usage = Table::new(vec!["period", "usage"]);
    for point in view.usage().data() {
        usage.row(vec![point.date.clone(), format!("{:.1}", point.usage)]);
    }
    out.push_str(&usage.render());

    out.push('\n');
    let mut categories = Table::new(vec!["category", "share"]);
    for share in view.categories().data() {
        categories.row(vec![share.name.clone(), format!("{:.1}%", share.value)]);
    }
    out.push_str(&categories.render());

    out.push('\n');
    let mut top = Table::new(vec!["item", "category", "used", "total cost"]);
    for item in view.top_items().data() {
        top.row(vec![
            item.name.clone(),
            item.category.clone(),
            format!("{} {}", item.usage_amount, item.usage_unit),
            format!("${:.2}", item.total_cost),
        ]);
    }
    out.push_str(&top.render());
    out
}

pub fn recipes(recipes: &[&Recipe]) -> String {
    let mut table = Table::new(vec!["name", "category", "prep", "ingredients", "last used", ""]);
    for recipe in recipes {
        table.row(vec![
            recipe.name.clone(),
            recipe.category.clone(),
            format!("{} min", recipe.prep_time),
            recipe.ingredients.to_string(),
            recipe.last_used.clone(),
            if recipe.popular { "popular".into() } else { String::new() },
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::fallback;

    #[test]
    fn status_arguments_are_forgiving() {
        assert_eq!(parse_inventory_status("low-stock"), Ok(InventoryStatus::LowStock));
        assert_eq!(parse_inventory_status("Out of Stock"), Ok(InventoryStatus::OutOfStock));
        assert_eq!(parse_supplier_status("PENDING"), Ok(SupplierStatus::Pending));
        assert!(parse_supplier_status("retired").unwrap_err().contains("Active"));
    }

    #[test]
    fn table_pads_columns() {
        let mut table = Table::new(vec!["a", "b"]);
        table.row(vec!["long cell".into(), "x".into()]);
        assert_eq!(table.render(), "a          b\nlong cell  x\n");
        assert_eq!(Table::new(vec!["a"]).render(), "a\n(nothing to show)\n");
    }

    #[test]
    fn fallback_banner_leads_the_listing() {
        let items = fallback::inventory_items();
        let rows: Vec<&InventoryItem> = items.iter().collect();
        let out = inventory(&rows, Some(&Notice::fallback()));

        assert!(out.starts_with("[x] Connection error: Could not connect to the server."));
        assert!(out.contains(&badge(&items[0].status)));
    }
}
