//! Status and priority classification for display.
//!
//! Every mapping is total. Unrecognised wire values land in `Tone::Neutral`.

use crate::alert::{AlertKind, Priority};
use crate::inventory::InventoryStatus;
use crate::order::OrderStatus;
use crate::supplier::SupplierStatus;

/// Presentation category (colour family) for a badge or row accent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tone {
    /// green
    Positive,
    /// yellow
    Warning,
    /// orange
    Caution,
    /// red
    Critical,
    /// blue
    Info,
    /// gray; the default bucket
    Neutral,
}

impl Tone {
    /// Short marker used by text renderers.
    pub fn marker(&self) -> &'static str {
        match self {
            Tone::Positive => "+",
            Tone::Warning => "!",
            Tone::Caution => "~",
            Tone::Critical => "x",
            Tone::Info => ">",
            Tone::Neutral => "-",
        }
    }
}

/// Icon shown next to an alert.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Icon {
    Triangle,
    Clock,
    Cart,
}

/// Anything with a presentation tone.
pub trait Badge {
    fn tone(&self) -> Tone;
}

impl Badge for InventoryStatus {
    fn tone(&self) -> Tone {
        match self {
            InventoryStatus::InStock => Tone::Positive,
            InventoryStatus::LowStock => Tone::Warning,
            InventoryStatus::OutOfStock => Tone::Critical,
            InventoryStatus::ExpiringSoon => Tone::Caution,
            InventoryStatus::Other(_) => Tone::Neutral,
        }
    }
}

impl Badge for OrderStatus {
    fn tone(&self) -> Tone {
        match self {
            OrderStatus::Delivered => Tone::Positive,
            OrderStatus::Requested => Tone::Warning,
            OrderStatus::Cancelled => Tone::Critical,
            OrderStatus::InTransit => Tone::Info,
            OrderStatus::Other(_) => Tone::Neutral,
        }
    }
}

impl Badge for SupplierStatus {
    fn tone(&self) -> Tone {
        match self {
            SupplierStatus::Active => Tone::Positive,
            SupplierStatus::Inactive => Tone::Critical,
            SupplierStatus::Pending => Tone::Warning,
            SupplierStatus::Other(_) => Tone::Neutral,
        }
    }
}

impl Badge for Priority {
    fn tone(&self) -> Tone {
        match self {
            Priority::High => Tone::Critical,
            Priority::Medium => Tone::Warning,
        }
    }
}

impl Badge for AlertKind {
    fn tone(&self) -> Tone {
        match self {
            AlertKind::LowStock => Tone::Warning,
            AlertKind::Expiring => Tone::Caution,
            AlertKind::OutOfStock => Tone::Critical,
        }
    }
}

impl AlertKind {
    pub fn icon(&self) -> Icon {
        match self {
            AlertKind::LowStock => Icon::Triangle,
            AlertKind::Expiring => Icon::Clock,
            AlertKind::OutOfStock => Icon::Cart,
        }
    }
}
