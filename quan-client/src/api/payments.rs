//! `/payments` and `/invoices`

use super::with_query;
use crate::{ClientResult, HttpClient};
use chrono::NaiveDate;
use shared::BranchId;
use shared::models::{Invoice, Payment};

const PAYMENTS: &str = "payments";
const INVOICES: &str = "invoices";

/// Payments recorded for an order
pub async fn list_for_order<C: HttpClient>(client: &C, order_id: i64) -> ClientResult<Vec<Payment>> {
    let path = with_query(PAYMENTS, &[("orderId", Some(order_id.to_string()))]);
    super::fetch_list(client, &path).await
}

/// Invoices of a branch, optionally for one day
pub async fn list_invoices<C: HttpClient>(
    client: &C,
    branch_id: Option<BranchId>,
    date: Option<NaiveDate>,
) -> ClientResult<Vec<Invoice>> {
    let path = with_query(
        INVOICES,
        &[
            ("branchId", branch_id.map(|b| b.to_string())),
            ("date", date.map(|d| d.format("%Y-%m-%d").to_string())),
        ],
    );
    super::fetch_list(client, &path).await
}

pub async fn get_invoice<C: HttpClient>(client: &C, id: i64) -> ClientResult<Invoice> {
    super::fetch_one(client, &format!("{INVOICES}/{id}")).await
}
