use crate::labels::labelled_enum;
use serde::{Deserialize, Serialize};

labelled_enum! {
    pub enum ProductCategory {
        CleaningAgents => "cleaning-agents",
        Equipment => "equipment",
        Consumables => "consumables",
        ProtectiveGear => "protective-gear",
    }
}

/// Marketplace catalogue item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ProductCategory,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
