//! `/restaurant/orders` and its `/items`, `/send-to-kitchen`, `/payment`,
//! `/note` sub-resources

use super::with_query;
use crate::{ClientResult, HttpClient};
use shared::models::{Invoice, PaymentRequest};
use shared::order::{
    AddItemsRequest, CreateOrderRequest, NoteRequest, Order, OrderDto, OrderItemPatch, OrderStatus,
};
use shared::{ApiResponse, BranchId, TableId};

const PATH: &str = "restaurant/orders";

/// Orders of a branch, optionally filtered by status
pub async fn list<C: HttpClient>(
    client: &C,
    branch_id: Option<BranchId>,
    status: Option<OrderStatus>,
) -> ClientResult<Vec<Order>> {
    let status = status.map(|s| match s {
        OrderStatus::New => "new",
        OrderStatus::Preparing => "preparing",
        OrderStatus::Completed => "completed",
    });
    let path = with_query(
        PATH,
        &[
            ("branchId", branch_id.map(|b| b.to_string())),
            ("status", status.map(str::to_string)),
        ],
    );
    let dtos: Vec<OrderDto> = super::fetch_list(client, &path).await?;
    Ok(dtos.into_iter().map(OrderDto::into_order).collect())
}

/// The table's order in status `new` or `preparing`, if any
pub async fn active_for_table<C: HttpClient>(client: &C, table_id: TableId) -> ClientResult<Option<Order>> {
    let path = with_query(
        PATH,
        &[
            ("tableId", Some(table_id.to_string())),
            ("status", Some("new,preparing".to_string())),
        ],
    );
    let dtos: Vec<OrderDto> = super::fetch_list(client, &path).await?;
    Ok(dtos
        .into_iter()
        .find(|o| o.table_id == table_id && o.status.is_active())
        .map(OrderDto::into_order))
}

pub async fn get<C: HttpClient>(client: &C, order_id: i64) -> ClientResult<Order> {
    let dto: OrderDto = super::fetch_one(client, &format!("{PATH}/{order_id}")).await?;
    Ok(dto.into_order())
}

pub async fn create<C: HttpClient>(client: &C, payload: &CreateOrderRequest) -> ClientResult<Order> {
    let dto: OrderDto = super::create(client, PATH, payload).await?;
    Ok(dto.into_order())
}

/// `POST /restaurant/orders/{id}/items`
pub async fn add_items<C: HttpClient>(
    client: &C,
    order_id: i64,
    payload: &AddItemsRequest,
) -> ClientResult<Order> {
    let dto: OrderDto = super::create(client, &format!("{PATH}/{order_id}/items"), payload).await?;
    Ok(dto.into_order())
}

/// `PUT /restaurant/orders/{id}/items/{line}`
pub async fn update_item<C: HttpClient>(
    client: &C,
    order_id: i64,
    order_item_id: i64,
    patch: &OrderItemPatch,
) -> ClientResult<()> {
    let path = format!("{PATH}/{order_id}/items/{order_item_id}");
    super::into_ack(client.put::<ApiResponse<serde_json::Value>, _>(&path, patch).await?)
}

/// `DELETE /restaurant/orders/{id}/items/{line}`
pub async fn remove_item<C: HttpClient>(client: &C, order_id: i64, order_item_id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{order_id}/items/{order_item_id}")).await
}

/// `POST /restaurant/orders/{id}/send-to-kitchen`
pub async fn send_to_kitchen<C: HttpClient>(client: &C, order_id: i64) -> ClientResult<()> {
    let path = format!("{PATH}/{order_id}/send-to-kitchen");
    super::into_ack(client.post_empty::<ApiResponse<serde_json::Value>>(&path).await?)
}

/// `PATCH /restaurant/orders/{id}/note`
pub async fn update_note<C: HttpClient>(client: &C, order_id: i64, note: &str) -> ClientResult<()> {
    let body = NoteRequest { note: note.to_string() };
    let path = format!("{PATH}/{order_id}/note");
    super::into_ack(client.patch::<ApiResponse<serde_json::Value>, _>(&path, &body).await?)
}

/// `POST /restaurant/orders/{id}/payment`, returns the issued invoice
pub async fn pay<C: HttpClient>(client: &C, order_id: i64, payment: &PaymentRequest) -> ClientResult<Invoice> {
    super::create(client, &format!("{PATH}/{order_id}/payment"), payment).await
}
