//! `/restaurant/kitchen-orders`

use super::with_query;
use crate::{ClientResult, HttpClient};
use shared::models::KitchenOrder;
use shared::order::{ItemStatus, OrderStatus, StatusRequest};
use shared::{ApiResponse, BranchId};

const PATH: &str = "restaurant/kitchen-orders";

/// Orders the kitchen has to work on, highest priority then oldest first
pub async fn list<C: HttpClient>(client: &C, branch_id: Option<BranchId>) -> ClientResult<Vec<KitchenOrder>> {
    let path = with_query(PATH, &[("branchId", branch_id.map(|b| b.to_string()))]);
    let mut orders: Vec<KitchenOrder> = super::fetch_list(client, &path).await?;
    orders.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.created_at.cmp(&b.created_at)));
    Ok(orders)
}

/// `PATCH /restaurant/kitchen-orders/{order}/items/{item}/status`
pub async fn update_item_status<C: HttpClient>(
    client: &C,
    order_id: i64,
    order_item_id: i64,
    status: ItemStatus,
) -> ClientResult<()> {
    let path = format!("{PATH}/{order_id}/items/{order_item_id}/status");
    super::into_ack(
        client
            .patch::<ApiResponse<serde_json::Value>, _>(&path, &StatusRequest { status })
            .await?,
    )
}

/// `PATCH /restaurant/kitchen-orders/{order}/status`
pub async fn update_status<C: HttpClient>(client: &C, order_id: i64, status: OrderStatus) -> ClientResult<()> {
    let path = format!("{PATH}/{order_id}/status");
    super::into_ack(
        client
            .patch::<ApiResponse<serde_json::Value>, _>(&path, &StatusRequest { status })
            .await?,
    )
}

/// Kitchen picks up the ticket
pub async fn start_order<C: HttpClient>(client: &C, order_id: i64) -> ClientResult<()> {
    update_status(client, order_id, OrderStatus::Preparing).await
}

/// Kitchen finished every line of the ticket
pub async fn complete_order<C: HttpClient>(client: &C, order_id: i64) -> ClientResult<()> {
    update_status(client, order_id, OrderStatus::Completed).await
}
