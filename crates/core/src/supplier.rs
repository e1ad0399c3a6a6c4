//! Suppliers the restaurant buys from.

use serde::{Deserialize, Serialize};

use crate::categories::Categories;
use crate::entity::Entity;
use crate::id::SupplierId;

wire_status! {
    /// Relationship status with a supplier.
    SupplierStatus {
        Active => "Active",
        Inactive => "Inactive",
        Pending => "Pending",
    }
}

/// A supplier row (`/supplier/getAll`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "supplier_id")]
    pub id: SupplierId,
    pub company: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub contact_person: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub mobile: String,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub address: String,
    pub status: SupplierStatus,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub categories: Categories,
}

impl Supplier {
    /// Case-insensitive match of `needle` against company or the joined
    /// category string.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.company.to_lowercase().contains(needle)
            || self.categories.join().to_lowercase().contains(needle)
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Payload for `POST /supplier/save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub company: String,
    pub contact_person: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub status: SupplierStatus,
    pub categories: Categories,
}

/// Element of `/supplier/names`, used to populate order forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierName {
    pub company: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_flattens_categories() {
        let draft = SupplierDraft {
            company: "Ocean Catch".into(),
            contact_person: "R. Silva".into(),
            email: "orders@oceancatch.example".into(),
            mobile: "555-0142".into(),
            address: "Pier 4".into(),
            status: SupplierStatus::Pending,
            categories: ["Seafood"].into_iter().collect(),
        };

        let wire = serde_json::to_value(&draft).unwrap();
        assert_eq!(wire["categories"], "Seafood");
        assert_eq!(wire["status"], "Pending");
        assert!(wire.get("supplier_id").is_none());
    }

    #[test]
    fn search_covers_categories() {
        let supplier: Supplier = serde_json::from_value(json!({
            "supplier_id": 2,
            "company": "Daily Dairy Co",
            "contact_person": "M. Lee",
            "email": "m@daily.example",
            "mobile": "555-0100",
            "address": "12 Creamery Rd",
            "status": "Active",
            "categories": "Dairy,Bakery"
        }))
        .unwrap();

        assert!(supplier.matches("bakery"));
        assert!(supplier.matches("daily"));
        assert!(!supplier.matches("seafood"));
    }
}
