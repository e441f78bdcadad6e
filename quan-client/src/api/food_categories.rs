//! `/restaurant/food-categories`

use super::with_query;
use crate::{ClientResult, HttpClient};
use shared::models::{FoodCategory, FoodCategoryCreate, FoodCategoryUpdate};

const PATH: &str = "restaurant/food-categories";

/// Categories, optionally restricted to one menu, in display order
pub async fn list<C: HttpClient>(client: &C, menu_id: Option<i64>) -> ClientResult<Vec<FoodCategory>> {
    let path = with_query(PATH, &[("menuId", menu_id.map(|m| m.to_string()))]);
    let mut categories: Vec<FoodCategory> = super::fetch_list(client, &path).await?;
    categories.sort_by_key(|c| c.sort_order);
    Ok(categories)
}

pub async fn create<C: HttpClient>(client: &C, payload: &FoodCategoryCreate) -> ClientResult<FoodCategory> {
    super::create(client, PATH, payload).await
}

pub async fn update<C: HttpClient>(
    client: &C,
    id: i64,
    payload: &FoodCategoryUpdate,
) -> ClientResult<FoodCategory> {
    super::update(client, &format!("{PATH}/{id}"), payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}
