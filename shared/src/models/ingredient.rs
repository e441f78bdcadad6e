//! Ingredient Models

use serde::{Deserialize, Serialize};

/// Ingredient entity (stock item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub unit_id: Option<i64>,
    #[serde(default)]
    pub stock_quantity: f64,
    /// Reorder threshold
    #[serde(default)]
    pub min_quantity: f64,
}

impl Ingredient {
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.min_quantity
    }
}

/// Create ingredient payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCreate {
    pub name: String,
    pub unit_id: Option<i64>,
    pub stock_quantity: Option<f64>,
    pub min_quantity: Option<f64>,
}

/// Update ingredient payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<f64>,
}

/// Recipe line: how much of an ingredient one portion of a food uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodIngredient {
    pub id: i64,
    pub food_id: i64,
    pub ingredient_id: i64,
    pub quantity: f64,
}

/// Create recipe line payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodIngredientCreate {
    pub food_id: i64,
    pub ingredient_id: i64,
    pub quantity: f64,
}
