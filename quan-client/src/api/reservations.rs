//! `/restaurant/reservations`

use super::with_query;
use crate::{ClientResult, HttpClient};
use chrono::NaiveDate;
use shared::models::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
use shared::{ApiResponse, BranchId};

const PATH: &str = "restaurant/reservations";

/// Reservations of a branch, optionally for one day, soonest first
pub async fn list<C: HttpClient>(
    client: &C,
    branch_id: Option<BranchId>,
    date: Option<NaiveDate>,
) -> ClientResult<Vec<Reservation>> {
    let path = with_query(
        PATH,
        &[
            ("branchId", branch_id.map(|b| b.to_string())),
            ("date", date.map(|d| d.format("%Y-%m-%d").to_string())),
        ],
    );
    let mut reservations: Vec<Reservation> = super::fetch_list(client, &path).await?;
    reservations.sort_by_key(|r| r.reserved_at);
    Ok(reservations)
}

pub async fn get<C: HttpClient>(client: &C, id: i64) -> ClientResult<Reservation> {
    super::fetch_one(client, &format!("{PATH}/{id}")).await
}

pub async fn create<C: HttpClient>(client: &C, payload: &ReservationCreate) -> ClientResult<Reservation> {
    super::create(client, PATH, payload).await
}

pub async fn update<C: HttpClient>(
    client: &C,
    id: i64,
    payload: &ReservationUpdate,
) -> ClientResult<Reservation> {
    super::update(client, &format!("{PATH}/{id}"), payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}

/// `PATCH /restaurant/reservations/{id}/status` (confirm, seat, cancel...)
pub async fn update_status<C: HttpClient>(
    client: &C,
    id: i64,
    status: ReservationStatus,
) -> ClientResult<Reservation> {
    let body = shared::order::StatusRequest { status };
    super::into_data(
        client
            .patch::<ApiResponse<Reservation>, _>(&format!("{PATH}/{id}/status"), &body)
            .await?,
    )
}
