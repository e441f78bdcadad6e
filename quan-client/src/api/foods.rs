//! `/restaurant/foods`

use super::with_query;
use crate::http::FileUpload;
use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{Food, FoodCreate, FoodUpdate};

const PATH: &str = "restaurant/foods";

pub async fn list<C: HttpClient>(
    client: &C,
    menu_id: Option<i64>,
    category_id: Option<i64>,
) -> ClientResult<Vec<Food>> {
    let path = with_query(
        PATH,
        &[
            ("menuId", menu_id.map(|m| m.to_string())),
            ("categoryId", category_id.map(|c| c.to_string())),
        ],
    );
    super::fetch_list(client, &path).await
}

pub async fn get<C: HttpClient>(client: &C, id: i64) -> ClientResult<Food> {
    super::fetch_one(client, &format!("{PATH}/{id}")).await
}

pub async fn create<C: HttpClient>(client: &C, payload: &FoodCreate) -> ClientResult<Food> {
    super::create(client, PATH, payload).await
}

pub async fn update<C: HttpClient>(client: &C, id: i64, payload: &FoodUpdate) -> ClientResult<Food> {
    super::update(client, &format!("{PATH}/{id}"), payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}

/// Upload the food picture (multipart field `image`)
pub async fn upload_image<C: HttpClient>(client: &C, id: i64, image: FileUpload) -> ClientResult<Food> {
    super::into_data(
        client
            .upload::<ApiResponse<Food>>(&format!("{PATH}/{id}/image"), image)
            .await?,
    )
}
