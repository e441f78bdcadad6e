//! Area Model

use crate::types::BranchId;
use serde::{Deserialize, Serialize};

/// Area entity (a named zone of a branch: hall, terrace, private room...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub branch_id: BranchId,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create area payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaCreate {
    pub name: String,
    pub description: Option<String>,
    pub branch_id: BranchId,
}

/// Update area payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
