//! `larder-views`
//!
//! **Responsibility:** one View-Model Controller per screen.
//!
//! Every controller follows the same protocol: fetch on refresh, store what
//! the server returned (or the fallback set, with a notice), apply local
//! filters at read time, and reconcile mutations by re-fetching the whole
//! collection. Each controller owns a [`MountScope`]; once unmounted, late
//! responses are dropped instead of applied.

pub mod alerts;
pub mod analytics;
pub mod context;
pub mod dashboard;
pub mod filters;
pub mod forms;
pub mod inventory;
pub mod orders;
pub mod recipes;
pub mod scope;
pub mod session;
pub mod state;
pub mod suppliers;

pub use alerts::AlertsPanel;
pub use analytics::AnalyticsDashboard;
pub use context::ViewContext;
pub use dashboard::DashboardStats;
pub use filters::{InventoryFilter, OrderFilter, OrderTab, RecipeFilter, RecipeTab, StatusFilter, SupplierFilter};
pub use forms::{FormError, InventoryForm, OrderEditForm, OrderForm, RecipeForm, SupplierForm};
pub use inventory::{InventoryDetail, InventoryOverview};
pub use orders::OrdersList;
pub use recipes::RecipeLibrary;
pub use scope::{MountScope, UnmountHandle};
pub use session::Session;
pub use state::{Notice, NoticeLevel, Phase, ViewState};
pub use suppliers::SuppliersList;
