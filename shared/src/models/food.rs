//! Food Model

use serde::{Deserialize, Serialize};

/// Sale status of a food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodStatus {
    #[default]
    Available,
    OutOfStock,
    Discontinued,
}

/// Food entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Unit price (VND)
    pub price: f64,
    pub category_id: Option<i64>,
    pub menu_id: Option<i64>,
    /// Image URL returned by the upload endpoint
    pub image: Option<String>,
    pub unit_id: Option<i64>,
    #[serde(default)]
    pub status: FoodStatus,
}

impl Food {
    /// Whether the food can be put into a cart
    pub fn is_orderable(&self) -> bool {
        self.status == FoodStatus::Available
    }
}

/// Create food payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<i64>,
    pub menu_id: Option<i64>,
    pub unit_id: Option<i64>,
}

/// Update food payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FoodStatus>,
}
