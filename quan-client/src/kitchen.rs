//! Kitchen Monitor - periodic refresh of the kitchen order list
//!
//! Polls the kitchen orders on a fixed interval and reports what changed
//! since the last minute: brand-new tickets and items appended to tickets
//! that were already on the board. Events go out on an mpsc channel so the
//! screen can play its bell and show a toast.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use shared::models::{KitchenOrder, KitchenOrderItem};
use shared::{BranchId, TableId};
use tokio::sync::{RwLock, mpsc};
use tokio_util::sync::CancellationToken;

use crate::api;
use crate::{ClientConfig, ClientResult, HttpClient};

/// How far back an order or item counts as new
const NEW_ACTIVITY_WINDOW_SECS: i64 = 60;

/// Items added to a ticket that was already on the board
#[derive(Debug, Clone, PartialEq)]
pub struct AppendedItems {
    pub order_id: i64,
    pub table_id: TableId,
    pub table_name: Option<String>,
    pub items: Vec<KitchenOrderItem>,
}

/// Result of [`detect_activity`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KitchenActivity {
    pub new_orders: Vec<KitchenOrder>,
    pub appended: Vec<AppendedItems>,
}

impl KitchenActivity {
    pub fn is_empty(&self) -> bool {
        self.new_orders.is_empty() && self.appended.is_empty()
    }
}

/// Event sent to the kitchen screen
#[derive(Debug, Clone)]
pub enum KitchenEvent {
    /// The list was reloaded
    Refreshed { orders: Vec<KitchenOrder> },
    /// Tickets created within the last minute
    NewOrders(Vec<KitchenOrder>),
    /// Items added to an older ticket within the last minute
    ItemsAppended(AppendedItems),
    /// The reload failed, the previous list is kept
    PollFailed(String),
}

/// Split recent activity into new tickets and appended items.
///
/// An order created after `now - 1 minute` is new. An older order whose
/// items include some created after that threshold has appended items.
pub fn detect_activity(orders: &[KitchenOrder], now: DateTime<Utc>) -> KitchenActivity {
    let threshold = now - chrono::Duration::seconds(NEW_ACTIVITY_WINDOW_SECS);
    let mut activity = KitchenActivity::default();

    for order in orders {
        if order.created_at > threshold {
            activity.new_orders.push(order.clone());
            continue;
        }
        let items: Vec<KitchenOrderItem> = order
            .items
            .iter()
            .filter(|i| i.created_at > threshold)
            .cloned()
            .collect();
        if !items.is_empty() {
            activity.appended.push(AppendedItems {
                order_id: order.id,
                table_id: order.table_id,
                table_name: order.table_name.clone(),
                items,
            });
        }
    }
    activity
}

/// Background poller for the kitchen board
pub struct KitchenMonitor<C: HttpClient> {
    client: Arc<C>,
    branch_id: Option<BranchId>,
    interval: Duration,
    events: mpsc::Sender<KitchenEvent>,
    orders: Arc<RwLock<Vec<KitchenOrder>>>,
    announced_orders: HashSet<i64>,
    announced_items: HashSet<i64>,
}

impl<C: HttpClient> KitchenMonitor<C> {
    pub fn new(client: Arc<C>, config: &ClientConfig, events: mpsc::Sender<KitchenEvent>) -> Self {
        Self {
            client,
            branch_id: config.branch_id,
            interval: config.kitchen_poll_interval,
            events,
            orders: Arc::new(RwLock::new(Vec::new())),
            announced_orders: HashSet::new(),
            announced_items: HashSet::new(),
        }
    }

    /// Last successfully loaded list, shared with the screen
    pub fn orders(&self) -> Arc<RwLock<Vec<KitchenOrder>>> {
        self.orders.clone()
    }

    /// Reload once and emit events for activity not announced before.
    ///
    /// On failure the previous list stays in place and `PollFailed` is sent.
    pub async fn poll_once(&mut self) -> ClientResult<KitchenActivity> {
        let fetched = match api::kitchen_orders::list(&*self.client, self.branch_id).await {
            Ok(orders) => orders,
            Err(e) => {
                tracing::warn!(error = %e, "Kitchen refresh failed, keeping previous list");
                self.emit(KitchenEvent::PollFailed(e.user_message())).await;
                return Err(e);
            }
        };

        let activity = self.unannounced(detect_activity(&fetched, Utc::now()));
        self.prune(&fetched);

        tracing::debug!(
            orders = fetched.len(),
            new_orders = activity.new_orders.len(),
            appended = activity.appended.len(),
            "Kitchen orders refreshed"
        );

        *self.orders.write().await = fetched.clone();
        self.emit(KitchenEvent::Refreshed { orders: fetched }).await;

        if !activity.new_orders.is_empty() {
            tracing::info!(count = activity.new_orders.len(), "New kitchen orders");
            self.emit(KitchenEvent::NewOrders(activity.new_orders.clone()))
                .await;
        }
        for appended in &activity.appended {
            tracing::info!(
                order_id = appended.order_id,
                table_id = appended.table_id,
                items = appended.items.len(),
                "Items appended to kitchen order"
            );
            self.emit(KitchenEvent::ItemsAppended(appended.clone())).await;
        }
        Ok(activity)
    }

    /// Poll until `cancel` fires or the event receiver goes away
    pub async fn run(mut self, cancel: CancellationToken) {
        tracing::info!(interval_secs = self.interval.as_secs(), "KitchenMonitor started");
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("KitchenMonitor cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    // errors are already reported as PollFailed
                    let _ = self.poll_once().await;
                    if self.events.is_closed() {
                        tracing::info!("Kitchen event receiver dropped, stopping monitor");
                        break;
                    }
                }
            }
        }
    }

    async fn emit(&self, event: KitchenEvent) {
        if self.events.send(event).await.is_err() {
            tracing::debug!("Kitchen event dropped, receiver closed");
        }
    }

    /// Drop activity that an earlier poll already announced, and remember the rest
    fn unannounced(&mut self, activity: KitchenActivity) -> KitchenActivity {
        let new_orders: Vec<KitchenOrder> = activity
            .new_orders
            .into_iter()
            .filter(|o| self.announced_orders.insert(o.id))
            .collect();
        // items of a new ticket are part of its announcement
        for order in &new_orders {
            self.announced_items.extend(order.items.iter().map(|i| i.id));
        }

        let appended = activity
            .appended
            .into_iter()
            .filter_map(|mut a| {
                a.items.retain(|i| self.announced_items.insert(i.id));
                (!a.items.is_empty()).then_some(a)
            })
            .collect();

        KitchenActivity {
            new_orders,
            appended,
        }
    }

    /// Forget ids that left the board
    fn prune(&mut self, current: &[KitchenOrder]) {
        let order_ids: HashSet<i64> = current.iter().map(|o| o.id).collect();
        let item_ids: HashSet<i64> = current
            .iter()
            .flat_map(|o| o.items.iter().map(|i| i.id))
            .collect();
        self.announced_orders.retain(|id| order_ids.contains(id));
        self.announced_items.retain(|id| item_ids.contains(id));
    }
}
