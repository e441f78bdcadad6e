//! Order, order item and their status enums

use crate::models::{Food, ServiceItem};
use crate::types::{BranchId, TableId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status Enums
// ============================================================================

/// What an order line refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Food,
    Service,
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    New,
    Preparing,
    Completed,
}

impl OrderStatus {
    /// Orders a table can still add to
    pub fn is_active(&self) -> bool {
        matches!(self, Self::New | Self::Preparing)
    }
}

/// Kitchen priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    #[default]
    Normal,
    High,
    Urgent,
}

/// Order line status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// On the order, not yet sent to the kitchen
    #[default]
    New,
    Preparing,
    Served,
    Completed,
}

impl ItemStatus {
    /// Sent to the kitchen or already served
    pub fn is_sent(&self) -> bool {
        !matches!(self, Self::New)
    }
}

// ============================================================================
// Order Item
// ============================================================================

fn default_quantity() -> i32 {
    1
}

/// Order line (also the cart and processing-order entry)
///
/// `id` is the referenced food or service item id; together with
/// `item_type` it identifies a line in carts. `order_item_id` is the backend
/// line id, present once the line has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_item_id: Option<i64>,
    pub name: String,
    /// Unit price
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
}

impl OrderItem {
    /// A single portion of a food, status `new`
    pub fn from_food(food: &Food) -> Self {
        Self {
            item_type: ItemType::Food,
            id: food.id,
            order_item_id: None,
            name: food.name.clone(),
            price: food.price,
            quantity: 1,
            note: None,
            status: ItemStatus::New,
        }
    }

    /// A single unit of a service item, status `new`
    pub fn from_service(item: &ServiceItem) -> Self {
        Self {
            item_type: ItemType::Service,
            id: item.id,
            order_item_id: None,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
            note: None,
            status: ItemStatus::New,
        }
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Cart identity: same referenced item of the same type
    pub fn same_line(&self, id: i64, item_type: ItemType) -> bool {
        self.id == id && self.item_type == item_type
    }
}

/// Partial update of an order line; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_item_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

impl OrderItemPatch {
    pub fn apply(&self, item: &mut OrderItem) {
        if let Some(v) = self.order_item_id {
            item.order_item_id = Some(v);
        }
        if let Some(v) = &self.name {
            item.name = v.clone();
        }
        if let Some(v) = self.price {
            item.price = v;
        }
        if let Some(v) = self.quantity {
            item.quantity = v;
        }
        if let Some(v) = &self.note {
            item.note = Some(v.clone());
        }
        if let Some(v) = self.status {
            item.status = v;
        }
    }
}

// ============================================================================
// Order
// ============================================================================

/// The active order of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend order id, `None` until the order has been created remotely
    pub id: Option<i64>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub note: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub priority: OrderPriority,
    pub table_id: TableId,
    pub branch_id: Option<BranchId>,
}

impl Order {
    /// Empty local order for a table
    pub fn new(table_id: TableId, branch_id: Option<BranchId>) -> Self {
        Self {
            id: None,
            items: Vec::new(),
            note: None,
            status: OrderStatus::New,
            priority: OrderPriority::Normal,
            table_id,
            branch_id,
        }
    }

    /// Split lines into (not yet sent, sent or served)
    pub fn partition_items(&self) -> (Vec<OrderItem>, Vec<OrderItem>) {
        self.items.iter().cloned().partition(|i| !i.status.is_sent())
    }
}

/// Shallow merge into an existing order; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub id: Option<i64>,
    pub items: Option<Vec<OrderItem>>,
    pub note: Option<String>,
    pub status: Option<OrderStatus>,
    pub priority: Option<OrderPriority>,
    pub branch_id: Option<BranchId>,
}

impl OrderPatch {
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Default::default()
        }
    }

    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply(self, order: &mut Order) {
        if let Some(v) = self.id {
            order.id = Some(v);
        }
        if let Some(v) = self.items {
            order.items = v;
        }
        if let Some(v) = self.note {
            order.note = Some(v);
        }
        if let Some(v) = self.status {
            order.status = v;
        }
        if let Some(v) = self.priority {
            order.priority = v;
        }
        if let Some(v) = self.branch_id {
            order.branch_id = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: i64, line_id: i64, item_type: ItemType, status: ItemStatus) -> OrderItem {
        OrderItem {
            item_type,
            id,
            order_item_id: Some(line_id),
            name: format!("Món {id}"),
            price: 50_000.0,
            quantity: 1,
            note: None,
            status,
        }
    }

    #[test]
    fn test_item_wire_format() {
        let json = r#"{"type":"service","id":4,"name":"Khăn lạnh","price":5000}"#;
        let item: OrderItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Service);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.status, ItemStatus::New);
        assert_eq!(item.order_item_id, None);
    }

    #[test]
    fn test_partition_items() {
        let mut order = Order::new(1, None);
        order.items = vec![
            line(1, 10, ItemType::Food, ItemStatus::New),
            line(2, 11, ItemType::Food, ItemStatus::Preparing),
            line(3, 12, ItemType::Service, ItemStatus::Served),
        ];

        let (unsent, sent) = order.partition_items();
        assert_eq!(unsent.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(sent.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_order_patch_is_shallow() {
        let mut order = Order::new(5, Some(1));
        order.note = Some("ít cay".into());

        OrderPatch::status(OrderStatus::Preparing).apply(&mut order);
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.note.as_deref(), Some("ít cay"));
    }
}
