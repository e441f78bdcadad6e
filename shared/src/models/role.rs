//! Role Model

use crate::types::Permission;
use serde::{Deserialize, Serialize};

/// Role entity (RBAC)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Permission strings (e.g. ["*"], ["orders:read", "menus:*"])
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub is_system: bool,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCreate {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<Permission>,
}

/// Update role payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
}
