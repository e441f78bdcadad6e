//! Reservation Model

use crate::types::BranchId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Seated,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Whether the reservation still holds its table
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub party_size: i32,
    pub reserved_at: DateTime<Utc>,
    pub table_id: Option<i64>,
    pub branch_id: Option<BranchId>,
    pub note: Option<String>,
    #[serde(default)]
    pub status: ReservationStatus,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub party_size: i32,
    pub reserved_at: DateTime<Utc>,
    pub table_id: Option<i64>,
    pub branch_id: Option<BranchId>,
    pub note: Option<String>,
}

/// Update reservation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
}
