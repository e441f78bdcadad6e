//! Kitchen Order Model
//!
//! The kitchen screen's view of an order: items with their own creation
//! timestamps so that items appended to an existing order can be told apart
//! from the original ticket.

use crate::order::{ItemStatus, ItemType, OrderPriority, OrderStatus};
use crate::types::TableId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kitchen order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrder {
    /// Order ID
    pub id: i64,
    pub table_id: TableId,
    pub table_name: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub priority: OrderPriority,
    #[serde(default)]
    pub items: Vec<KitchenOrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Kitchen order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrderItem {
    /// Order item (line) ID
    pub id: i64,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    pub name: String,
    pub quantity: i32,
    pub note: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

impl KitchenOrder {
    /// Lines the kitchen still has to work on
    pub fn pending_items(&self) -> impl Iterator<Item = &KitchenOrderItem> {
        self.items
            .iter()
            .filter(|i| matches!(i.status, ItemStatus::New | ItemStatus::Preparing))
    }
}
