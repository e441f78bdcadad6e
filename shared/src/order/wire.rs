//! Order wire DTOs
//!
//! The backend names the referenced item `foodId` or `itemId` depending on
//! the line type and uses `id` for the line itself. These types translate
//! between that shape and [`Order`] / [`OrderItem`].

use super::types::{ItemStatus, ItemType, Order, OrderItem, OrderPriority, OrderStatus};
use crate::types::{BranchId, TableId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Order as returned by `/restaurant/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    pub table_id: TableId,
    pub branch_id: Option<BranchId>,
    pub note: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub priority: OrderPriority,
    #[serde(default)]
    pub items: Vec<OrderLineDto>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Order line as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDto {
    /// Line id
    pub id: i64,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    pub food_id: Option<i64>,
    pub item_id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub note: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
}

impl OrderLineDto {
    /// Referenced food or service item id, by line type
    pub fn reference_id(&self) -> Option<i64> {
        match self.item_type {
            ItemType::Food => self.food_id,
            ItemType::Service => self.item_id,
        }
    }

    /// Convert to an [`OrderItem`]; `None` when the line carries no reference
    pub fn into_item(self) -> Option<OrderItem> {
        let id = self.reference_id()?;
        Some(OrderItem {
            item_type: self.item_type,
            id,
            order_item_id: Some(self.id),
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            note: self.note,
            status: self.status,
        })
    }
}

impl OrderDto {
    pub fn into_order(self) -> Order {
        let order_id = self.id;
        let items = self
            .items
            .into_iter()
            .filter_map(|line| {
                let line_id = line.id;
                let item = line.into_item();
                if item.is_none() {
                    warn!(order_id, line_id, "Order line without item reference, skipped");
                }
                item
            })
            .collect();

        Order {
            id: Some(self.id),
            items,
            note: self.note,
            status: self.status,
            priority: self.priority,
            table_id: self.table_id,
            branch_id: self.branch_id,
        }
    }
}

/// Line payload for creating orders and appending items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    pub quantity: i32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: ItemStatus,
}

impl From<&OrderItem> for OrderItemInput {
    fn from(item: &OrderItem) -> Self {
        let (food_id, item_id) = match item.item_type {
            ItemType::Food => (Some(item.id), None),
            ItemType::Service => (None, Some(item.id)),
        };
        Self {
            item_type: item.item_type,
            food_id,
            item_id,
            quantity: item.quantity,
            price: item.price,
            note: item.note.clone(),
            status: item.status,
        }
    }
}

/// `POST /restaurant/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub table_id: TableId,
    pub branch_id: Option<BranchId>,
    pub note: Option<String>,
    pub priority: OrderPriority,
    pub items: Vec<OrderItemInput>,
}

impl CreateOrderRequest {
    pub fn from_items(order: &Order, items: &[OrderItem]) -> Self {
        Self {
            table_id: order.table_id,
            branch_id: order.branch_id,
            note: order.note.clone(),
            priority: order.priority,
            items: items.iter().map(OrderItemInput::from).collect(),
        }
    }
}

/// `POST /restaurant/orders/{id}/items`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemsRequest {
    pub items: Vec<OrderItemInput>,
}

/// `PATCH /restaurant/orders/{id}/note`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRequest {
    pub note: String,
}

/// Status change of an order or a line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest<S> {
    pub status: S,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_dto_maps_reference_ids() {
        let json = r#"{
            "id": 42, "tableId": 7, "branchId": 1, "note": null, "status": "preparing",
            "items": [
                {"id": 100, "type": "food", "foodId": 3, "name": "Phở bò", "price": 55000, "quantity": 2, "status": "preparing"},
                {"id": 101, "type": "service", "itemId": 9, "name": "Khăn lạnh", "price": 3000, "quantity": 4, "status": "served"},
                {"id": 102, "type": "food", "name": "broken", "price": 1, "quantity": 1}
            ]
        }"#;
        let order = serde_json::from_str::<OrderDto>(json).unwrap().into_order();

        assert_eq!(order.id, Some(42));
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].id, 3);
        assert_eq!(order.items[0].order_item_id, Some(100));
        assert_eq!(order.items[1].item_type, ItemType::Service);
        assert_eq!(order.items[1].id, 9);
    }

    #[test]
    fn test_item_input_serializes_reference_by_type() {
        let item = OrderItem {
            item_type: ItemType::Service,
            id: 9,
            order_item_id: None,
            name: "Khăn lạnh".into(),
            price: 3000.0,
            quantity: 2,
            note: None,
            status: ItemStatus::Served,
        };
        let value = serde_json::to_value(OrderItemInput::from(&item)).unwrap();
        assert_eq!(value["type"], "service");
        assert_eq!(value["itemId"], 9);
        assert!(value.get("foodId").is_none());
        assert_eq!(value["status"], "served");
    }
}
