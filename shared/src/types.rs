//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Dining table identifier; every per-table map in the order store is keyed by it
pub type TableId = i64;

/// Restaurant branch identifier
pub type BranchId = i64;

/// Permission string attached to a role (e.g. `orders:write`, `menus:*`, `*`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(pub String);

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
