//! Order-taking flow
//!
//! Drives one table through `no order -> cart -> sent to kitchen -> ready
//! for payment -> paid` against the backend, keeping the shared
//! [`OrderStore`] in sync after every round trip.
//!
//! A failed call is logged and returned; the store is only written after the
//! calls it depends on succeeded. There is no retry and no rollback.

use std::sync::Arc;

use crate::api;
use crate::{ClientError, ClientResult, HttpClient};
use shared::models::{
    DiningTable, Food, Invoice, KitchenRouting, PaymentMethod, PaymentRequest, ServiceItem,
    ServiceType,
};
use shared::order::{
    AddItemsRequest, CreateOrderRequest, ItemStatus, Order, OrderItem, OrderItemInput, OrderPatch,
    OrderStore, OrderTotals, TableFlowState,
};
use shared::{BranchId, TableId};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

/// Order store shared by every screen of the client
pub type SharedStore = Arc<RwLock<OrderStore>>;

/// Result of adding a service item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServicePlacement {
    /// Waiting in the cart for the next kitchen send
    Cart,
    /// Recorded on the order as served
    Served,
}

/// Ordering screen logic for a branch
pub struct OrderingSession<C: HttpClient> {
    client: Arc<C>,
    store: SharedStore,
    branch_id: Option<BranchId>,
}

impl<C: HttpClient> OrderingSession<C> {
    pub fn new(client: Arc<C>, store: SharedStore, branch_id: Option<BranchId>) -> Self {
        Self {
            client,
            store,
            branch_id,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub async fn flow_state(&self, table_id: TableId) -> TableFlowState {
        self.store.read().await.flow_state(table_id)
    }

    /// Open a table: load its active order and split the lines into cart
    /// (not yet sent) and processing (sent or served).
    ///
    /// Local cart lines that were never persisted are kept, and so is a
    /// local order that was never created remotely.
    pub async fn select_table(&self, table: &DiningTable) -> ClientResult<TableFlowState> {
        if !table.accepts_orders() {
            return Err(ClientError::Validation(format!(
                "Bàn {} đã được đặt trước",
                table.name
            )));
        }

        let table_id = table.id;
        let active = api::orders::active_for_table(&*self.client, table_id)
            .await
            .inspect_err(|e| error!(table_id, error = %e, "Failed to load table order"))?;

        let mut store = self.store.write().await;
        match active {
            Some(order) => {
                info!(table_id, order_id = ?order.id, items = order.items.len(), "Loaded active order");
                self.apply_canonical(&mut store, order, &[]);
            }
            None => {
                if store.order(table_id).is_some_and(|o| o.id.is_some()) {
                    store.remove_order(table_id);
                }
                store.set_processing_order(table_id, Vec::new());
                let local: Vec<OrderItem> = store
                    .cart(table_id)
                    .iter()
                    .filter(|i| i.order_item_id.is_none())
                    .cloned()
                    .collect();
                store.set_cart(table_id, local);
            }
        }
        Ok(store.flow_state(table_id))
    }

    /// Put one portion of a food into the cart
    pub async fn add_food(&self, table_id: TableId, food: &Food) -> ClientResult<()> {
        if !food.is_orderable() {
            return Err(ClientError::Validation(format!("Món {} tạm hết", food.name)));
        }
        self.store
            .write()
            .await
            .add_to_cart(table_id, OrderItem::from_food(food));
        Ok(())
    }

    /// Add a service item, routed by its service type: kitchen services go
    /// to the cart, the rest is recorded on the order as served right away.
    pub async fn add_service(
        &self,
        table_id: TableId,
        item: &ServiceItem,
        types: &[ServiceType],
    ) -> ClientResult<ServicePlacement> {
        let line = OrderItem::from_service(item);
        match item.routing(types) {
            KitchenRouting::NeedsPreparation => {
                self.store
                    .write()
                    .await
                    .add_to_cart(table_id, line.with_status(ItemStatus::New));
                Ok(ServicePlacement::Cart)
            }
            KitchenRouting::ReadyImmediately => {
                let line = line.with_status(ItemStatus::Served);
                let order = self
                    .persist_lines(table_id, std::slice::from_ref(&line))
                    .await
                    .inspect_err(|e| error!(table_id, service = %item.name, error = %e, "Failed to add service"))?;

                let mut store = self.store.write().await;
                self.apply_canonical(&mut store, order, &[]);
                info!(table_id, service = %item.name, "Service recorded as served");
                Ok(ServicePlacement::Served)
            }
        }
    }

    /// Send the cart to the kitchen.
    ///
    /// Creates the order or appends the unsaved lines, triggers the kitchen
    /// send, then reloads the order and drops the lines it now carries as
    /// sent from the cart.
    pub async fn send_to_kitchen(&self, table_id: TableId) -> ClientResult<Order> {
        let cart = self.store.read().await.cart(table_id).to_vec();
        if cart.is_empty() {
            return Err(ClientError::Validation("Chưa có món nào để gửi bếp".into()));
        }

        let unsaved: Vec<OrderItem> = cart
            .iter()
            .filter(|i| i.order_item_id.is_none())
            .cloned()
            .collect();

        let order_id = match self.order_id(table_id).await {
            Some(id) if unsaved.is_empty() => id,
            _ => {
                let order = self
                    .persist_lines(table_id, &unsaved)
                    .await
                    .inspect_err(|e| error!(table_id, error = %e, "Failed to save order lines"))?;
                let id = order.id.ok_or_else(|| {
                    ClientError::InvalidResponse("Order saved without id".into())
                })?;
                // lines now carry backend ids, a retry will not append them again
                let mut store = self.store.write().await;
                self.apply_canonical(&mut store, order, &unsaved);
                id
            }
        };

        api::orders::send_to_kitchen(&*self.client, order_id)
            .await
            .inspect_err(|e| error!(table_id, order_id, error = %e, "Failed to send order to kitchen"))?;

        let canonical = api::orders::get(&*self.client, order_id)
            .await
            .inspect_err(|e| error!(table_id, order_id, error = %e, "Failed to reload order"))?;

        let (_, sent) = canonical.partition_items();
        let mut store = self.store.write().await;
        store.clear_sent_items(table_id, &sent);
        self.apply_canonical(&mut store, canonical.clone(), &[]);
        info!(table_id, order_id, lines = cart.len(), "Order sent to kitchen");
        Ok(canonical)
    }

    /// Change the order note, remotely when the order exists.
    ///
    /// Before the first send the note is kept on a local order and goes out
    /// with the create request.
    pub async fn update_note(&self, table_id: TableId, note: &str) -> ClientResult<()> {
        if let Some(order_id) = self.order_id(table_id).await {
            api::orders::update_note(&*self.client, order_id, note)
                .await
                .inspect_err(|e| error!(table_id, order_id, error = %e, "Failed to update note"))?;
        }
        let mut store = self.store.write().await;
        if !store.has_order(table_id) {
            store.save_order(table_id, Order::new(table_id, self.branch_id));
        }
        store.update_order(table_id, OrderPatch::note(note));
        Ok(())
    }

    /// Remove one cart line; a line already saved on the order is deleted remotely
    pub async fn remove_cart_item(&self, table_id: TableId, item: &OrderItem) -> ClientResult<()> {
        if let (Some(order_id), Some(line_id)) = (self.order_id(table_id).await, item.order_item_id) {
            api::orders::remove_item(&*self.client, order_id, line_id)
                .await
                .inspect_err(|e| error!(table_id, order_id, line_id, error = %e, "Failed to remove line"))?;
        }
        self.store.write().await.remove_cart_line(table_id, item);
        Ok(())
    }

    /// Bill summary of what has been sent or served
    pub async fn totals(&self, table_id: TableId) -> OrderTotals {
        OrderTotals::from_items(self.store.read().await.processing_order(table_id))
    }

    /// Settle the bill and clear the table
    pub async fn pay(
        &self,
        table_id: TableId,
        method: PaymentMethod,
        received: Option<f64>,
    ) -> ClientResult<Invoice> {
        let (order_id, totals, cart_len) = {
            let store = self.store.read().await;
            (
                store.order(table_id).and_then(|o| o.id),
                OrderTotals::from_items(store.processing_order(table_id)),
                store.cart(table_id).len(),
            )
        };

        if totals.is_empty() {
            return Err(ClientError::Validation("Chưa có món nào để thanh toán".into()));
        }
        let order_id = order_id
            .ok_or_else(|| ClientError::Validation("Bàn chưa có đơn hàng".into()))?;
        if cart_len > 0 {
            warn!(table_id, cart_len, "Paying with unsent cart lines, they will be dropped");
        }

        let mut request = PaymentRequest::new(method, totals.subtotal);
        if let Some(received) = received {
            request = request.with_received(received);
        }

        let invoice = api::orders::pay(&*self.client, order_id, &request)
            .await
            .inspect_err(|e| error!(table_id, order_id, error = %e, "Payment failed"))?;

        self.store.write().await.mark_paid(table_id);
        info!(table_id, order_id, invoice = %invoice.invoice_number, total = invoice.total, "Order paid");
        Ok(invoice)
    }

    async fn order_id(&self, table_id: TableId) -> Option<i64> {
        self.store.read().await.order(table_id).and_then(|o| o.id)
    }

    /// Create the table's order with `lines`, or append them to the existing one
    async fn persist_lines(&self, table_id: TableId, lines: &[OrderItem]) -> ClientResult<Order> {
        let local = self.store.read().await.order(table_id).cloned();
        match local.as_ref().and_then(|o| o.id) {
            Some(order_id) => {
                let request = AddItemsRequest {
                    items: lines.iter().map(OrderItemInput::from).collect(),
                };
                api::orders::add_items(&*self.client, order_id, &request).await
            }
            None => {
                let base = local.unwrap_or_else(|| Order::new(table_id, self.branch_id));
                let mut request = CreateOrderRequest::from_items(&base, lines);
                request.branch_id = request.branch_id.or(self.branch_id);
                api::orders::create(&*self.client, &request).await
            }
        }
    }

    /// Make the store reflect a backend order: save it, move its sent lines
    /// to processing and keep its unsent lines plus unsaved local lines in
    /// the cart. `persisted` are the local lines the order was just saved
    /// with; the order now carries them, so they leave the unsaved set.
    fn apply_canonical(&self, store: &mut OrderStore, order: Order, persisted: &[OrderItem]) {
        let table_id = order.table_id;
        let (unsent, sent) = order.partition_items();

        let mut cart: Vec<OrderItem> = store
            .cart(table_id)
            .iter()
            .filter(|i| {
                i.order_item_id.is_none()
                    && !persisted.iter().any(|p| p.same_line(i.id, i.item_type))
            })
            .cloned()
            .collect();
        cart.extend(unsent);

        store.set_cart(table_id, cart);
        store.set_processing_order(table_id, sent);
        store.save_order(table_id, order);
    }
}
