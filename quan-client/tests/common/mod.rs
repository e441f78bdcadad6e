// quan-client/tests/common/mod.rs
// In-memory backend for integration tests

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use quan_client::{ClientError, ClientResult, FileUpload, HttpClient};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Canned reply for one request
#[derive(Debug, Clone)]
pub enum Reply {
    Ok(Value),
    Fail { status: u16, message: String },
}

/// A request the backend received
#[derive(Debug, Clone)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Routes `(method, path)` to queued replies.
///
/// Replies are consumed in order; the last one keeps answering once the
/// queue is down to a single entry. Unrouted requests fail with `NotFound`.
#[derive(Default)]
pub struct MockBackend {
    routes: Mutex<HashMap<(String, String), VecDeque<Reply>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer with `{ success: true, data }`
    pub fn ok(&self, method: &str, path: &str, data: Value) -> &Self {
        self.push(method, path, Reply::Ok(json!({ "success": true, "data": data })))
    }

    /// Answer with an HTTP error
    pub fn fail(&self, method: &str, path: &str, status: u16, message: &str) -> &Self {
        self.push(
            method,
            path,
            Reply::Fail {
                status,
                message: message.to_string(),
            },
        )
    }

    fn push(&self, method: &str, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Requests sent with `method` to `path`
    pub fn calls_to(&self, method: &str, path: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method && c.path == path)
            .collect()
    }

    fn respond<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            body,
        });

        let reply = {
            let mut routes = self.routes.lock().unwrap();
            let queue = routes
                .get_mut(&(method.to_string(), path.to_string()))
                .ok_or_else(|| ClientError::NotFound(format!("{method} {path}")))?;
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        };

        match reply {
            Some(Reply::Ok(value)) => Ok(serde_json::from_value(value)?),
            Some(Reply::Fail { status, message }) => Err(ClientError::Api { status, message }),
            None => Err(ClientError::NotFound(format!("{method} {path}"))),
        }
    }
}

#[async_trait]
impl HttpClient for MockBackend {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("GET", path, None)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.respond("POST", path, Some(serde_json::to_value(body)?))
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("POST", path, None)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.respond("PUT", path, Some(serde_json::to_value(body)?))
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.respond("PATCH", path, Some(serde_json::to_value(body)?))
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("DELETE", path, None)
    }

    async fn upload<T: DeserializeOwned>(&self, path: &str, file: FileUpload) -> ClientResult<T> {
        let body = json!({ "field": file.field, "fileName": file.file_name, "size": file.bytes.len() });
        self.respond("POST", path, Some(body))
    }

    fn token(&self) -> Option<&str> {
        Some("test-token")
    }
}

// ========== Fixtures ==========

/// Order line as the backend returns it
pub fn food_line(line_id: i64, food_id: i64, name: &str, price: f64, quantity: i32, status: &str) -> Value {
    json!({
        "id": line_id, "type": "food", "foodId": food_id, "name": name,
        "price": price, "quantity": quantity, "status": status
    })
}

pub fn service_line(line_id: i64, item_id: i64, name: &str, price: f64, quantity: i32, status: &str) -> Value {
    json!({
        "id": line_id, "type": "service", "itemId": item_id, "name": name,
        "price": price, "quantity": quantity, "status": status
    })
}

pub fn order_json(order_id: i64, table_id: i64, status: &str, items: Vec<Value>) -> Value {
    json!({
        "id": order_id, "tableId": table_id, "branchId": 1, "note": null,
        "status": status, "priority": "normal", "items": items
    })
}

pub fn invoice_json(order_id: i64, table_id: i64, total: f64) -> Value {
    json!({
        "id": 900, "invoiceNumber": "HD-000900", "orderId": order_id, "tableId": table_id,
        "items": [], "subtotal": total, "total": total, "paymentMethod": "cash",
        "issuedAt": "2024-05-01T12:00:00Z"
    })
}

/// Path of the active-order lookup for a table
pub fn active_order_path(table_id: i64) -> String {
    format!("restaurant/orders?tableId={table_id}&status=new,preparing")
}
