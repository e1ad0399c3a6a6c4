//! Static substitute datasets shown when the backend cannot be reached.
//!
//! Every function returns the same data on every call. These values are only
//! ever displayed together with a "could not connect" notice; callers learn
//! that they are looking at fallback data from the fetch outcome, never by
//! comparing records against this module.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::alert::Alert;
use crate::analytics::{AnalyticsSummary, CategoryShare, Timeframe, TopItem, Trend, UsagePoint};
use crate::categories::Categories;
use crate::id::{InventoryId, OrderId, SupplierId};
use crate::inventory::{InventoryItem, InventoryStatus};
use crate::order::{Order, OrderStatus};
use crate::recipe::Recipe;
use crate::stats::InventoryStats;
use crate::supplier::{Supplier, SupplierName, SupplierStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: i64,
    name: &str,
    category: &str,
    quantity: Decimal,
    unit: &str,
    status: InventoryStatus,
    expires_on: NaiveDate,
) -> InventoryItem {
    InventoryItem {
        id: InventoryId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit: unit.to_string(),
        status,
        expires_on: Some(expires_on),
    }
}

pub fn inventory_items() -> Vec<InventoryItem> {
    use InventoryStatus::*;
    vec![
        item(1, "Whole Milk", "Dairy", Decimal::new(24, 0), "Liters", InStock, date(2026, 10, 28)),
        item(2, "Tomatoes", "Produce", Decimal::new(35, 1), "Kg", LowStock, date(2026, 10, 24)),
        item(3, "Chicken Breast", "Meat", Decimal::new(0, 0), "Kg", OutOfStock, date(2026, 10, 22)),
        item(4, "Mozzarella", "Dairy", Decimal::new(6, 0), "Kg", ExpiringSoon, date(2026, 10, 21)),
        item(5, "All-Purpose Flour", "Bakery", Decimal::new(50, 0), "Kg", InStock, date(2027, 4, 1)),
        item(6, "Olive Oil", "Pantry", Decimal::new(2, 0), "Liters", LowStock, date(2027, 6, 15)),
        item(7, "Black Pepper", "Spices", Decimal::new(15, 1), "Kg", InStock, date(2027, 9, 30)),
        item(8, "Fresh Basil", "Produce", Decimal::new(5, 1), "Kg", ExpiringSoon, date(2026, 10, 20)),
    ]
}

fn with_status(status: InventoryStatus) -> Vec<InventoryItem> {
    inventory_items()
        .into_iter()
        .filter(|item| item.status == status)
        .collect()
}

pub fn low_stock_items() -> Vec<InventoryItem> {
    with_status(InventoryStatus::LowStock)
}

pub fn expiring_items() -> Vec<InventoryItem> {
    with_status(InventoryStatus::ExpiringSoon)
}

pub fn out_of_stock_items() -> Vec<InventoryItem> {
    with_status(InventoryStatus::OutOfStock)
}

pub fn alerts() -> Vec<Alert> {
    Alert::merge(low_stock_items(), expiring_items(), out_of_stock_items())
}

pub fn inventory_stats() -> InventoryStats {
    let items = inventory_items();
    let count = |status: InventoryStatus| items.iter().filter(|i| i.status == status).count() as u64;

    InventoryStats {
        available: items
            .iter()
            .filter(|i| i.status != InventoryStatus::OutOfStock)
            .count() as u64,
        low_stock: count(InventoryStatus::LowStock),
        expiring_soon: count(InventoryStatus::ExpiringSoon),
        inventory_value: orders().iter().map(|o| o.price).sum(),
    }
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    name: &str,
    category: &str,
    supplier: &str,
    created: NaiveDate,
    delivery: Option<NaiveDate>,
    status: OrderStatus,
    quantity: Decimal,
    unit: &str,
    price: Decimal,
) -> Order {
    Order {
        id: OrderId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        supplier: supplier.to_string(),
        created,
        delivery,
        status,
        quantity,
        unit: unit.to_string(),
        price,
    }
}

pub fn orders() -> Vec<Order> {
    use OrderStatus::*;
    vec![
        order(
            "ORD-1001", "Tomatoes", "Produce", "Green Valley Farms",
            date(2026, 10, 12), Some(date(2026, 10, 15)), Delivered,
            Decimal::new(20, 0), "Kg", Decimal::new(4550, 2),
        ),
        order(
            "ORD-1002", "Chicken Breast", "Meat", "Prime Cuts Butchery",
            date(2026, 10, 14), Some(date(2026, 10, 19)), InTransit,
            Decimal::new(15, 0), "Kg", Decimal::new(12750, 2),
        ),
        order(
            "ORD-1003", "Mozzarella", "Dairy", "Daily Dairy Co",
            date(2026, 10, 16), None, Requested,
            Decimal::new(8, 0), "Kg", Decimal::new(9600, 2),
        ),
        order(
            "ORD-1004", "Olive Oil", "Pantry", "Mediterranean Imports",
            date(2026, 10, 2), None, Cancelled,
            Decimal::new(10, 0), "Liters", Decimal::new(12000, 2),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn supplier(
    id: i64,
    company: &str,
    contact_person: &str,
    email: &str,
    mobile: &str,
    address: &str,
    status: SupplierStatus,
    categories: &str,
) -> Supplier {
    Supplier {
        id: SupplierId::new(id),
        company: company.to_string(),
        contact_person: contact_person.to_string(),
        email: email.to_string(),
        mobile: mobile.to_string(),
        address: address.to_string(),
        status,
        categories: Categories::split(categories),
    }
}

pub fn suppliers() -> Vec<Supplier> {
    use SupplierStatus::*;
    vec![
        supplier(
            1, "Green Valley Farms", "Ana Torres", "orders@greenvalley.example",
            "555-0101", "48 Orchard Lane", Active, "Produce",
        ),
        supplier(
            2, "Prime Cuts Butchery", "Sam Okafor", "sales@primecuts.example",
            "555-0102", "9 Market Street", Active, "Meat,Seafood",
        ),
        supplier(
            3, "Daily Dairy Co", "Mei Lee", "hello@dailydairy.example",
            "555-0103", "12 Creamery Road", Pending, "Dairy",
        ),
        supplier(
            4, "Mediterranean Imports", "Luca Bianchi", "trade@medimports.example",
            "555-0104", "77 Harbour Way", Inactive, "Pantry,Spices",
        ),
    ]
}

pub fn supplier_names() -> Vec<SupplierName> {
    suppliers()
        .into_iter()
        .map(|s| SupplierName { company: s.company })
        .collect()
}

pub fn analytics_summary() -> AnalyticsSummary {
    AnalyticsSummary {
        total_spent: 12450.75,
        total_items: 345,
        average_cost: 36.09,
        wastage_percentage: 8.5,
        spending_trend: Trend::Up,
        spending_change: 4.2,
        waste_trend: Trend::Down,
        waste_change: 2.1,
    }
}

fn series(points: &[(&str, f64)]) -> Vec<UsagePoint> {
    points
        .iter()
        .map(|(label, usage)| UsagePoint {
            date: (*label).to_string(),
            usage: *usage,
        })
        .collect()
}

/// Fixed usage series for each timeframe.
pub fn usage(timeframe: Timeframe) -> Vec<UsagePoint> {
    match timeframe {
        Timeframe::Week => series(&[
            ("Monday", 25.5),
            ("Tuesday", 28.2),
            ("Wednesday", 32.1),
            ("Thursday", 30.5),
            ("Friday", 35.8),
            ("Saturday", 40.2),
            ("Sunday", 38.5),
        ]),
        Timeframe::Month => series(&[
            ("Week 1", 120.5),
            ("Week 2", 135.2),
            ("Week 3", 128.7),
            ("Week 4", 142.3),
        ]),
        Timeframe::Quarter => series(&[
            ("January", 450.5),
            ("February", 420.2),
            ("March", 480.7),
        ]),
        Timeframe::Year => series(&[
            ("Q1", 1250.5),
            ("Q2", 1320.2),
            ("Q3", 1180.7),
            ("Q4", 1420.3),
        ]),
    }
}

pub fn category_breakdown() -> Vec<CategoryShare> {
    [
        ("Produce", 3500.0, "#4CAF50"),
        ("Meat", 4200.0, "#F44336"),
        ("Dairy", 2100.0, "#2196F3"),
        ("Bakery", 1800.0, "#FFC107"),
        ("Pantry", 2800.0, "#9C27B0"),
    ]
    .into_iter()
    .map(|(name, value, color)| CategoryShare {
        name: name.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
}

pub fn top_items() -> Vec<TopItem> {
    [
        ("item1", "Chicken Breast", "Meat", 120.0, "kg", 8.5),
        ("item2", "Fresh Tomatoes", "Produce", 85.0, "kg", 3.25),
        ("item3", "Olive Oil", "Pantry", 45.0, "liters", 12.0),
        ("item4", "Parmesan Cheese", "Dairy", 30.0, "kg", 18.75),
        ("item5", "Flour", "Bakery", 75.0, "kg", 2.5),
    ]
    .into_iter()
    .map(|(id, name, category, usage_amount, usage_unit, cost_per_unit)| TopItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        usage_amount,
        usage_unit: usage_unit.to_string(),
        cost_per_unit,
        total_cost: usage_amount * cost_per_unit,
    })
    .collect()
}

/// The local recipe book.
pub fn recipes() -> Vec<Recipe> {
    [
        ("recipe1", "Spaghetti Bolognese", "Main Course", 45, 12, "Today", true),
        ("recipe2", "Margherita Pizza", "Main Course", 30, 8, "Yesterday", true),
        ("recipe3", "Caprese Salad", "Appetizer", 15, 5, "3 days ago", false),
        ("recipe4", "Tiramisu", "Dessert", 60, 9, "1 week ago", true),
        ("recipe5", "Chicken Caesar Salad", "Main Course", 25, 10, "2 days ago", false),
        ("recipe6", "Chocolate Mousse", "Dessert", 40, 7, "5 days ago", false),
    ]
    .into_iter()
    .map(|(id, name, category, prep_time, ingredients, last_used, popular)| Recipe {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        prep_time,
        ingredients,
        last_used: last_used.to_string(),
        popular,
    })
    .collect()
}
