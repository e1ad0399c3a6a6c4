//! `larder-core`: restaurant inventory domain as mirrored by the client.
//!
//! This crate contains **pure domain** types (no IO, no HTTP). Every entity here
//! is owned by the remote backend; the client only holds short-lived copies.

#[macro_use]
mod wire;

pub mod alert;
pub mod analytics;
pub mod categories;
pub mod entity;
pub mod error;
pub mod fallback;
pub mod id;
pub mod inventory;
pub mod order;
pub mod presentation;
pub mod recipe;
pub mod stats;
pub mod supplier;

pub use alert::{Alert, AlertKind, Priority};
pub use analytics::{AnalyticsSummary, CategoryShare, Timeframe, TopItem, Trend, UsagePoint};
pub use categories::Categories;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{InventoryId, OrderId, SupplierId};
pub use inventory::{InventoryDraft, InventoryItem, InventoryStatus};
pub use order::{Order, OrderDraft, OrderStatus};
pub use presentation::{Badge, Icon, Tone};
pub use recipe::Recipe;
pub use stats::InventoryStats;
pub use supplier::{Supplier, SupplierDraft, SupplierName, SupplierStatus};
