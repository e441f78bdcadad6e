//! `/roles`

use crate::{ClientResult, HttpClient};
use shared::models::{Role, RoleCreate, RoleUpdate};

const PATH: &str = "roles";

pub async fn list<C: HttpClient>(client: &C) -> ClientResult<Vec<Role>> {
    super::fetch_list(client, PATH).await
}

pub async fn create<C: HttpClient>(client: &C, payload: &RoleCreate) -> ClientResult<Role> {
    super::create(client, PATH, payload).await
}

pub async fn update<C: HttpClient>(client: &C, id: i64, payload: &RoleUpdate) -> ClientResult<Role> {
    super::update(client, &format!("{PATH}/{id}"), payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}
