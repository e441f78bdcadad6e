//! Dining Table Model

use crate::types::BranchId;
use serde::{Deserialize, Serialize};

/// Occupancy status of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub area_id: i64,
    pub capacity: i32,
    #[serde(default)]
    pub status: TableStatus,
    pub branch_id: Option<BranchId>,
}

impl DiningTable {
    /// Tables that can be opened from the ordering screen
    pub fn accepts_orders(&self) -> bool {
        matches!(self.status, TableStatus::Available | TableStatus::Occupied)
    }
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    pub name: String,
    pub area_id: i64,
    pub capacity: Option<i32>,
    pub branch_id: Option<BranchId>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TableStatus>,
}
