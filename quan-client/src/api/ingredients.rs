//! `/ingredients`

use crate::{ClientResult, HttpClient};
use shared::models::{Ingredient, IngredientCreate, IngredientUpdate};

const PATH: &str = "ingredients";

pub async fn list<C: HttpClient>(client: &C) -> ClientResult<Vec<Ingredient>> {
    super::fetch_list(client, PATH).await
}

/// Ingredients at or below their reorder threshold
pub async fn low_stock<C: HttpClient>(client: &C) -> ClientResult<Vec<Ingredient>> {
    let all = list(client).await?;
    Ok(all.into_iter().filter(Ingredient::is_low_stock).collect())
}

pub async fn create<C: HttpClient>(client: &C, payload: &IngredientCreate) -> ClientResult<Ingredient> {
    super::create(client, PATH, payload).await
}

pub async fn update<C: HttpClient>(
    client: &C,
    id: i64,
    payload: &IngredientUpdate,
) -> ClientResult<Ingredient> {
    super::update(client, &format!("{PATH}/{id}"), payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}
