//! `/restaurant/areas`

use super::with_query;
use crate::{ClientResult, HttpClient};
use shared::BranchId;
use shared::models::{Area, AreaCreate, AreaUpdate};

const PATH: &str = "restaurant/areas";

pub async fn list<C: HttpClient>(client: &C, branch_id: Option<BranchId>) -> ClientResult<Vec<Area>> {
    let path = with_query(PATH, &[("branchId", branch_id.map(|b| b.to_string()))]);
    super::fetch_list(client, &path).await
}

pub async fn get<C: HttpClient>(client: &C, id: i64) -> ClientResult<Area> {
    super::fetch_one(client, &format!("{PATH}/{id}")).await
}

pub async fn create<C: HttpClient>(client: &C, payload: &AreaCreate) -> ClientResult<Area> {
    super::create(client, PATH, payload).await
}

pub async fn update<C: HttpClient>(client: &C, id: i64, payload: &AreaUpdate) -> ClientResult<Area> {
    super::update(client, &format!("{PATH}/{id}"), payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}
