// quan-client/tests/api_wrappers.rs
// Resource wrappers: paths, query strings and envelope handling

mod common;

use common::MockBackend;
use quan_client::api::{food_categories, foods, kitchen_orders, payments, tables};
use quan_client::{ClientError, FileUpload};
use serde_json::json;
use shared::TableStatusCounts;
use shared::models::TableStatus;
use shared::order::ItemStatus;

#[tokio::test]
async fn test_tables_filtered_by_branch_and_area() {
    let backend = MockBackend::new();
    backend.ok(
        "GET",
        "restaurant/tables?branchId=1&areaId=2",
        json!([
            {"id": 1, "name": "Bàn 1", "areaId": 2, "capacity": 4, "status": "available", "branchId": 1},
            {"id": 2, "name": "Bàn 2", "areaId": 2, "capacity": 6, "status": "occupied", "branchId": 1},
            {"id": 3, "name": "Bàn 3", "areaId": 2, "capacity": 2, "status": "reserved", "branchId": 1}
        ]),
    );

    let list = tables::list(&backend, Some(1), Some(2)).await.unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[2].status, TableStatus::Reserved);

    let counts = TableStatusCounts::from_tables(&list);
    assert_eq!(counts.total, 3);
    assert_eq!(counts.available, 1);
    assert_eq!(counts.occupied, 1);
    assert_eq!(counts.reserved, 1);
}

#[tokio::test]
async fn test_categories_come_back_in_display_order() {
    let backend = MockBackend::new();
    backend.ok(
        "GET",
        "restaurant/food-categories",
        json!([
            {"id": 1, "name": "Đồ uống", "sortOrder": 3},
            {"id": 2, "name": "Khai vị", "sortOrder": 1},
            {"id": 3, "name": "Món chính", "sortOrder": 2}
        ]),
    );

    let names: Vec<String> = food_categories::list(&backend, None)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Khai vị", "Món chính", "Đồ uống"]);
}

#[tokio::test]
async fn test_missing_payload_is_an_invalid_response() {
    let backend = MockBackend::new();
    backend.ok("GET", "restaurant/foods/99", json!(null));

    let err = foods::get(&backend, 99).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_backend_error_message_reaches_the_toast() {
    let backend = MockBackend::new();
    backend.fail("DELETE", "restaurant/foods/5", 409, "Món đang có trong đơn hàng");

    let err = foods::delete(&backend, 5).await.unwrap_err();
    assert_eq!(err.user_message(), "Món đang có trong đơn hàng");
}

#[tokio::test]
async fn test_food_image_upload() {
    let backend = MockBackend::new();
    backend.ok(
        "POST",
        "restaurant/foods/4/image",
        json!({"id": 4, "name": "Gỏi cuốn", "price": 35000, "image": "/uploads/goi-cuon.jpg"}),
    );

    let upload = FileUpload::image("goi-cuon.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF]);
    let food = foods::upload_image(&backend, 4, upload).await.unwrap();
    assert_eq!(food.image.as_deref(), Some("/uploads/goi-cuon.jpg"));

    let calls = backend.calls_to("POST", "restaurant/foods/4/image");
    assert_eq!(calls[0].body.as_ref().map(|b| b["field"].clone()), Some(json!("image")));
}

#[tokio::test]
async fn test_kitchen_item_status_update() {
    let backend = MockBackend::new();
    backend.ok("PATCH", "restaurant/kitchen-orders/8/items/81/status", json!(null));
    backend.ok("PATCH", "restaurant/kitchen-orders/8/status", json!(null));

    kitchen_orders::update_item_status(&backend, 8, 81, ItemStatus::Served)
        .await
        .unwrap();
    kitchen_orders::complete_order(&backend, 8).await.unwrap();

    let item_calls = backend.calls_to("PATCH", "restaurant/kitchen-orders/8/items/81/status");
    assert_eq!(item_calls[0].body, Some(json!({"status": "served"})));
    let order_calls = backend.calls_to("PATCH", "restaurant/kitchen-orders/8/status");
    assert_eq!(order_calls[0].body, Some(json!({"status": "completed"})));
}

#[tokio::test]
async fn test_invoices_by_day() {
    let backend = MockBackend::new();
    backend.ok(
        "GET",
        "invoices?branchId=1&date=2024-05-01",
        json!([{
            "id": 1, "invoiceNumber": "HD-000001", "orderId": 42, "tableId": 7,
            "subtotal": 122000, "total": 122000, "paymentMethod": "transfer",
            "issuedAt": "2024-05-01T12:00:00Z"
        }]),
    );

    let day = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let invoices = payments::list_invoices(&backend, Some(1), Some(day)).await.unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].total, 122_000.0);
}
