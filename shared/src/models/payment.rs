//! Payment and Invoice Models

use crate::types::TableId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the bill was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Transfer,
}

/// Payment request body for `POST /restaurant/orders/{id}/payment`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payment_method: PaymentMethod,
    /// Amount due, computed from the processing items
    pub amount: f64,
    /// Cash handed over by the guest (cash payments only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PaymentRequest {
    pub fn new(payment_method: PaymentMethod, amount: f64) -> Self {
        Self {
            payment_method,
            amount,
            received_amount: None,
            note: None,
        }
    }

    pub fn with_received(mut self, received: f64) -> Self {
        self.received_amount = Some(received);
        self
    }

    /// Change to hand back; `None` when nothing was received or it does not cover the bill
    pub fn change_due(&self) -> Option<f64> {
        self.received_amount
            .filter(|r| *r >= self.amount)
            .map(|r| r - self.amount)
    }
}

/// Payment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub paid_at: DateTime<Utc>,
}

/// Invoice line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub amount: f64,
}

/// Invoice issued after a successful payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub order_id: i64,
    pub table_id: Option<TableId>,
    #[serde(default)]
    pub items: Vec<InvoiceLine>,
    pub subtotal: f64,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub issued_at: DateTime<Utc>,
}
