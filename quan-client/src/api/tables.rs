//! `/restaurant/tables`

use super::with_query;
use crate::{ClientResult, HttpClient};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus};
use shared::{ApiResponse, BranchId, TableId};

const PATH: &str = "restaurant/tables";

pub async fn list<C: HttpClient>(
    client: &C,
    branch_id: Option<BranchId>,
    area_id: Option<i64>,
) -> ClientResult<Vec<DiningTable>> {
    let path = with_query(
        PATH,
        &[
            ("branchId", branch_id.map(|b| b.to_string())),
            ("areaId", area_id.map(|a| a.to_string())),
        ],
    );
    super::fetch_list(client, &path).await
}

pub async fn get<C: HttpClient>(client: &C, id: TableId) -> ClientResult<DiningTable> {
    super::fetch_one(client, &format!("{PATH}/{id}")).await
}

pub async fn create<C: HttpClient>(client: &C, payload: &DiningTableCreate) -> ClientResult<DiningTable> {
    super::create(client, PATH, payload).await
}

pub async fn update<C: HttpClient>(
    client: &C,
    id: TableId,
    payload: &DiningTableUpdate,
) -> ClientResult<DiningTable> {
    super::update(client, &format!("{PATH}/{id}"), payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: TableId) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}

/// `PATCH /restaurant/tables/{id}/status`
pub async fn update_status<C: HttpClient>(
    client: &C,
    id: TableId,
    status: TableStatus,
) -> ClientResult<DiningTable> {
    let body = shared::order::StatusRequest { status };
    super::into_data(
        client
            .patch::<ApiResponse<DiningTable>, _>(&format!("{PATH}/{id}/status"), &body)
            .await?,
    )
}
