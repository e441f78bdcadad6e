//! Food Category Model

use serde::{Deserialize, Serialize};

/// Food category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Owning menu, if the category is scoped to one
    pub menu_id: Option<i64>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create food category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategoryCreate {
    pub name: String,
    pub description: Option<String>,
    pub menu_id: Option<i64>,
    pub sort_order: Option<i32>,
}

/// Update food category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
