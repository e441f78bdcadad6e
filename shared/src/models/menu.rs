//! Menu Model

use crate::types::BranchId;
use serde::{Deserialize, Serialize};

/// Menu entity (a named set of food categories, e.g. lunch menu)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub branch_id: Option<BranchId>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    pub name: String,
    pub description: Option<String>,
    pub branch_id: Option<BranchId>,
}

/// Update menu payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
