//! Per-table order/cart state container
//!
//! Three parallel maps keyed by table id:
//! - `orders`: the active order of each table
//! - `carts`: lines picked on the ordering screen, not yet sent to the kitchen
//! - `processing_orders`: lines already sent or served, the basis of the bill
//!
//! Entries are created lazily. Every operation is total: a missing entry is
//! either created empty or the call is a no-op, never an error. Nothing here
//! keeps the three maps consistent with each other; callers resynchronize
//! after each backend round trip.

use std::collections::{HashMap, HashSet};

use super::types::{ItemStatus, ItemType, Order, OrderItem, OrderItemPatch, OrderPatch};
use crate::types::TableId;
use tracing::debug;

/// Where a table is in the ordering flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFlowState {
    /// Nothing ordered
    NoOrder,
    /// Lines waiting in the cart
    CartBuilding,
    /// Sent lines still being prepared
    SentToKitchen,
    /// Everything sent has been served
    ReadyForPayment,
    /// Bill settled; cleared on the next order
    Paid,
}

/// Order/cart state container
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: HashMap<TableId, Order>,
    carts: HashMap<TableId, Vec<OrderItem>>,
    processing_orders: HashMap<TableId, Vec<OrderItem>>,
    paid: HashSet<TableId>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    pub fn order(&self, table_id: TableId) -> Option<&Order> {
        self.orders.get(&table_id)
    }

    pub fn has_order(&self, table_id: TableId) -> bool {
        self.orders.contains_key(&table_id)
    }

    /// Cart of a table; empty when none was created
    pub fn cart(&self, table_id: TableId) -> &[OrderItem] {
        self.carts.get(&table_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Processing lines of a table; empty when none were recorded
    pub fn processing_order(&self, table_id: TableId) -> &[OrderItem] {
        self.processing_orders
            .get(&table_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ========== Orders ==========

    /// Replace the order record of a table
    pub fn save_order(&mut self, table_id: TableId, order: Order) {
        debug!(table_id, order_id = ?order.id, items = order.items.len(), "Saving order");
        self.paid.remove(&table_id);
        self.orders.insert(table_id, order);
    }

    /// Shallow-merge into the table's order; no-op when the table has none
    pub fn update_order(&mut self, table_id: TableId, patch: OrderPatch) {
        if let Some(order) = self.orders.get_mut(&table_id) {
            patch.apply(order);
        }
    }

    /// Append a line to the table's order, creating an empty order if needed
    pub fn add_order_item(&mut self, table_id: TableId, item: OrderItem) {
        self.paid.remove(&table_id);
        self.orders
            .entry(table_id)
            .or_insert_with(|| Order::new(table_id, None))
            .items
            .push(item);
    }

    /// Merge `patch` into the order line with `item_id`, and into the cart
    /// entry with the same id when there is one
    pub fn update_order_item(&mut self, table_id: TableId, item_id: i64, patch: OrderItemPatch) {
        if let Some(order) = self.orders.get_mut(&table_id) {
            for item in order.items.iter_mut().filter(|i| i.id == item_id) {
                patch.apply(item);
            }
        }
        if let Some(cart) = self.carts.get_mut(&table_id) {
            for item in cart.iter_mut().filter(|i| i.id == item_id) {
                patch.apply(item);
            }
        }
    }

    pub fn remove_order_item(&mut self, table_id: TableId, item_id: i64) {
        if let Some(order) = self.orders.get_mut(&table_id) {
            order.items.retain(|i| i.id != item_id);
        }
    }

    /// Drop the table's order entry entirely
    pub fn remove_order(&mut self, table_id: TableId) {
        self.orders.remove(&table_id);
    }

    /// Set the status of the order line with `item_id`
    pub fn update_order_item_status(&mut self, table_id: TableId, item_id: i64, status: ItemStatus) {
        if let Some(order) = self.orders.get_mut(&table_id) {
            for item in order.items.iter_mut().filter(|i| i.id == item_id) {
                item.status = status;
            }
        }
    }

    // ========== Cart ==========

    /// Add a line to the cart, merging with an existing `(id, type)` line.
    /// Non-positive quantities count as one.
    ///
    /// Lines already saved on the backend are never merged into; the extra
    /// portions stay on a separate unsaved line until the next send.
    pub fn add_to_cart(&mut self, table_id: TableId, mut item: OrderItem) {
        if item.quantity <= 0 {
            item.quantity = 1;
        }
        self.paid.remove(&table_id);

        let cart = self.carts.entry(table_id).or_default();
        let existing = cart.iter_mut().find(|i| {
            i.order_item_id.is_none()
                && item.order_item_id.is_none()
                && i.same_line(item.id, item.item_type)
        });
        match existing {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => cart.push(item),
        }
    }

    pub fn remove_from_cart(&mut self, table_id: TableId, item_id: i64, item_type: ItemType) {
        if let Some(cart) = self.carts.get_mut(&table_id) {
            cart.retain(|i| !i.same_line(item_id, item_type));
        }
    }

    /// Remove exactly one cart line. A saved line is matched by its backend
    /// line id and also leaves the order; an unsaved one by `(id, type)`.
    pub fn remove_cart_line(&mut self, table_id: TableId, line: &OrderItem) {
        match line.order_item_id {
            Some(line_id) => {
                if let Some(order) = self.orders.get_mut(&table_id) {
                    order.items.retain(|i| i.order_item_id != Some(line_id));
                }
                if let Some(cart) = self.carts.get_mut(&table_id) {
                    cart.retain(|i| i.order_item_id != Some(line_id));
                }
            }
            None => {
                if let Some(cart) = self.carts.get_mut(&table_id) {
                    cart.retain(|i| {
                        i.order_item_id.is_some() || !i.same_line(line.id, line.item_type)
                    });
                }
            }
        }
    }

    pub fn clear_cart(&mut self, table_id: TableId) {
        self.carts.insert(table_id, Vec::new());
    }

    pub fn set_cart(&mut self, table_id: TableId, items: Vec<OrderItem>) {
        self.carts.insert(table_id, items);
    }

    /// Drop cart lines that match any of `sent` by `(id, type)`
    pub fn clear_sent_items(&mut self, table_id: TableId, sent: &[OrderItem]) {
        if let Some(cart) = self.carts.get_mut(&table_id) {
            cart.retain(|c| !sent.iter().any(|s| s.same_line(c.id, c.item_type)));
        }
    }

    // ========== Processing ==========

    pub fn set_processing_order(&mut self, table_id: TableId, items: Vec<OrderItem>) {
        self.processing_orders.insert(table_id, items);
    }

    // ========== Table lifecycle ==========

    /// Forget everything about a table: cart, processing lines and order
    pub fn reset_table(&mut self, table_id: TableId) {
        self.carts.insert(table_id, Vec::new());
        self.processing_orders.insert(table_id, Vec::new());
        self.orders.remove(&table_id);
        self.paid.remove(&table_id);
    }

    /// Reset the table and remember that its bill was settled
    pub fn mark_paid(&mut self, table_id: TableId) {
        self.reset_table(table_id);
        self.paid.insert(table_id);
    }

    pub fn flow_state(&self, table_id: TableId) -> TableFlowState {
        if self.paid.contains(&table_id) {
            return TableFlowState::Paid;
        }
        if !self.cart(table_id).is_empty() {
            return TableFlowState::CartBuilding;
        }

        let processing = self.processing_order(table_id);
        if processing.is_empty() {
            return TableFlowState::NoOrder;
        }
        if processing
            .iter()
            .any(|i| matches!(i.status, ItemStatus::New | ItemStatus::Preparing))
        {
            TableFlowState::SentToKitchen
        } else {
            TableFlowState::ReadyForPayment
        }
    }
}
