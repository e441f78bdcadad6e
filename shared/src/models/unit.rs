//! Unit Model

use serde::{Deserialize, Serialize};

/// Unit of measure (portion, kg, bottle...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: i64,
    pub name: String,
    pub symbol: Option<String>,
}

/// Create / update unit payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInput {
    pub name: String,
    pub symbol: Option<String>,
}
