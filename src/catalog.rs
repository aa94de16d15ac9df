//! EcoTachos equipment catalog.
//!
//! A read-only product list the shop tab renders; "buy" is a redirect to the
//! external shop, there is no checkout in the app.

use serde::{Deserialize, Serialize};

/// External shop the CTA button redirects to.
pub const SHOP_URL: &str = "https://shop-eco-delta.vercel.app/";

/// Category of waste bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum BinKind {
    Household,
    Communal,
    RecyclingPoint,
    Industrial,
}

impl BinKind {
    /// Display label, matching the original catalog copy.
    pub fn label(&self) -> &'static str {
        match self {
            BinKind::Household => "Domiciliario",
            BinKind::Communal => "Comunitario",
            BinKind::RecyclingPoint => "Punto Verde",
            BinKind::Industrial => "Industrial",
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub kind: BinKind,
    pub capacity_liters: u32,
    /// Suggested coverage, e.g. "3-5 viviendas"
    pub suggested_households: String,
    /// Reference market price range (soles)
    pub price_min: u32,
    pub price_max: u32,
    pub currency: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub active: bool,
    pub image_url: Option<String>,
}

impl CatalogItem {
    /// Formatted reference price range, e.g. "S/ 100 - S/ 120".
    pub fn price_range(&self) -> String {
        format!("S/ {} - S/ {}", self.price_min, self.price_max)
    }
}

/// The in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the demo items.
    pub fn with_demo_items() -> Self {
        Self {
            items: crate::demo::catalog_items(),
        }
    }

    /// All items.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Items currently offered.
    pub fn active_items(&self) -> Vec<&CatalogItem> {
        self.items.iter().filter(|i| i.active).collect()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Add an item to the catalog.
    pub fn add(&mut self, item: CatalogItem) {
        self.items.push(item);
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
