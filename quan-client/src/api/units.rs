//! `/units`

use crate::{ClientResult, HttpClient};
use shared::models::{Unit, UnitInput};

const PATH: &str = "units";

pub async fn list<C: HttpClient>(client: &C) -> ClientResult<Vec<Unit>> {
    super::fetch_list(client, PATH).await
}

pub async fn create<C: HttpClient>(client: &C, payload: &UnitInput) -> ClientResult<Unit> {
    super::create(client, PATH, payload).await
}

pub async fn update<C: HttpClient>(client: &C, id: i64, payload: &UnitInput) -> ClientResult<Unit> {
    super::update(client, &format!("{PATH}/{id}"), payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}
