//! Inventory DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Read models mirror the backend's response schemas (nested `item`,
//! `warehouse`, `category` objects included). Write models carry only the
//! fields the backend accepts on create.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: i64,
    pub category: Option<Category>,
}

impl Item {
    /// Category name, or the bare id when the category was not embedded.
    #[must_use]
    pub fn category_label(&self) -> String {
        self.category
            .as_ref()
            .map_or_else(|| format!("#{}", self.category_id), |c| c.name.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub location: String,
}

/// Current stock level of one item in one warehouse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: i64,
    pub item_id: i64,
    pub warehouse_id: i64,
    pub stock_level: i64,
    pub date_added: String,
    pub item: Item,
    pub warehouse: Warehouse,
}

/// Direction of a stock movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    #[default]
    Inflow,
    Outflow,
}

impl MovementType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inflow => "inflow",
            Self::Outflow => "outflow",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "inflow" => Some(Self::Inflow),
            "outflow" => Some(Self::Outflow),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: i64,
    pub item_id: i64,
    pub warehouse_id: i64,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub movement_date: String,
    pub price: f64,
    pub item: Item,
    pub warehouse: Warehouse,
    #[serde(default)]
    pub remaining_quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub category_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewWarehouse {
    pub name: String,
    pub location: String,
}

impl From<&Category> for NewCategory {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
        }
    }
}

impl From<&Item> for NewItem {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            category_id: item.category_id,
        }
    }
}

impl From<&Warehouse> for NewWarehouse {
    fn from(warehouse: &Warehouse) -> Self {
        Self {
            name: warehouse.name.clone(),
            location: warehouse.location.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewStockMovement {
    pub item_id: i64,
    pub warehouse_id: i64,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub movement_date: String,
    pub price: f64,
}

/// Admin-only account creation (`POST /users/register`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub date_joined: String,
    pub role: String,
}

/// `{status, message}` acknowledgement returned by delete endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}
