//! `/restaurant/service-types` and `/restaurant/service-items`

use crate::{ClientResult, HttpClient};
use shared::models::{ServiceItem, ServiceItemCreate, ServiceType, ServiceTypeInput};

const TYPES: &str = "restaurant/service-types";
const ITEMS: &str = "restaurant/service-items";

pub async fn list_types<C: HttpClient>(client: &C) -> ClientResult<Vec<ServiceType>> {
    super::fetch_list(client, TYPES).await
}

pub async fn create_type<C: HttpClient>(client: &C, payload: &ServiceTypeInput) -> ClientResult<ServiceType> {
    super::create(client, TYPES, payload).await
}

pub async fn update_type<C: HttpClient>(
    client: &C,
    id: i64,
    payload: &ServiceTypeInput,
) -> ClientResult<ServiceType> {
    super::update(client, &format!("{TYPES}/{id}"), payload).await
}

pub async fn list_items<C: HttpClient>(client: &C) -> ClientResult<Vec<ServiceItem>> {
    super::fetch_list(client, ITEMS).await
}

pub async fn create_item<C: HttpClient>(client: &C, payload: &ServiceItemCreate) -> ClientResult<ServiceItem> {
    super::create(client, ITEMS, payload).await
}

pub async fn delete_item<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{ITEMS}/{id}")).await
}
