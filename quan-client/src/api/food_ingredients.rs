//! `/food-ingredients` (recipes)

use super::with_query;
use crate::{ClientResult, HttpClient};
use shared::models::{FoodIngredient, FoodIngredientCreate};

const PATH: &str = "food-ingredients";

pub async fn list_for_food<C: HttpClient>(client: &C, food_id: i64) -> ClientResult<Vec<FoodIngredient>> {
    let path = with_query(PATH, &[("foodId", Some(food_id.to_string()))]);
    super::fetch_list(client, &path).await
}

pub async fn add<C: HttpClient>(client: &C, payload: &FoodIngredientCreate) -> ClientResult<FoodIngredient> {
    super::create(client, PATH, payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}
