//! `/restaurant/menus`

use super::with_query;
use crate::http::FileUpload;
use crate::{ClientResult, HttpClient};
use shared::models::{Menu, MenuCreate, MenuUpdate};
use shared::{ApiResponse, BranchId};

const PATH: &str = "restaurant/menus";

pub async fn list<C: HttpClient>(client: &C, branch_id: Option<BranchId>) -> ClientResult<Vec<Menu>> {
    let path = with_query(PATH, &[("branchId", branch_id.map(|b| b.to_string()))]);
    super::fetch_list(client, &path).await
}

pub async fn get<C: HttpClient>(client: &C, id: i64) -> ClientResult<Menu> {
    super::fetch_one(client, &format!("{PATH}/{id}")).await
}

pub async fn create<C: HttpClient>(client: &C, payload: &MenuCreate) -> ClientResult<Menu> {
    super::create(client, PATH, payload).await
}

pub async fn update<C: HttpClient>(client: &C, id: i64, payload: &MenuUpdate) -> ClientResult<Menu> {
    super::update(client, &format!("{PATH}/{id}"), payload).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<()> {
    super::remove(client, &format!("{PATH}/{id}")).await
}

/// Upload the menu cover image (multipart field `image`)
pub async fn upload_image<C: HttpClient>(client: &C, id: i64, image: FileUpload) -> ClientResult<Menu> {
    super::into_data(
        client
            .upload::<ApiResponse<Menu>>(&format!("{PATH}/{id}/image"), image)
            .await?,
    )
}
