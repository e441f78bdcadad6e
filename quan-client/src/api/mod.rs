//! REST API wrappers, one module per backend resource
//!
//! Each function is a thin async call over [`HttpClient`]: build the path,
//! send, unwrap the response envelope. No caching, no retries.

pub mod areas;
pub mod food_categories;
pub mod food_ingredients;
pub mod foods;
pub mod ingredients;
pub mod kitchen_orders;
pub mod menus;
pub mod orders;
pub mod payments;
pub mod reservations;
pub mod roles;
pub mod services;
pub mod tables;
pub mod units;

use crate::{ClientError, ClientResult, HttpClient};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;

/// Unwrap the envelope, turning `success: false` into an API error
pub(crate) fn into_data<T>(resp: ApiResponse<T>) -> ClientResult<T> {
    if !resp.success {
        return Err(ClientError::Api {
            status: 200,
            message: resp.message.unwrap_or_default(),
        });
    }
    resp.data
        .ok_or_else(|| ClientError::InvalidResponse("Missing response data".into()))
}

/// Like [`into_data`] for endpoints whose payload is irrelevant
pub(crate) fn into_ack(resp: ApiResponse<serde_json::Value>) -> ClientResult<()> {
    if !resp.success {
        return Err(ClientError::Api {
            status: 200,
            message: resp.message.unwrap_or_default(),
        });
    }
    Ok(())
}

/// Append `key=value` pairs for the parameters that are set
pub(crate) fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| format!("{k}={v}")))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

pub(crate) async fn fetch_list<C: HttpClient, T: DeserializeOwned>(
    client: &C,
    path: &str,
) -> ClientResult<Vec<T>> {
    into_data(client.get::<ApiResponse<Vec<T>>>(path).await?)
}

pub(crate) async fn fetch_one<C: HttpClient, T: DeserializeOwned>(
    client: &C,
    path: &str,
) -> ClientResult<T> {
    into_data(client.get::<ApiResponse<T>>(path).await?)
}

pub(crate) async fn create<C: HttpClient, T: DeserializeOwned, B: Serialize + Sync>(
    client: &C,
    path: &str,
    body: &B,
) -> ClientResult<T> {
    into_data(client.post::<ApiResponse<T>, B>(path, body).await?)
}

pub(crate) async fn update<C: HttpClient, T: DeserializeOwned, B: Serialize + Sync>(
    client: &C,
    path: &str,
    body: &B,
) -> ClientResult<T> {
    into_data(client.put::<ApiResponse<T>, B>(path, body).await?)
}

pub(crate) async fn remove<C: HttpClient>(client: &C, path: &str) -> ClientResult<()> {
    into_ack(client.delete::<ApiResponse<serde_json::Value>>(path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_skips_unset() {
        assert_eq!(with_query("restaurant/tables", &[]), "restaurant/tables");
        assert_eq!(
            with_query(
                "restaurant/tables",
                &[("branchId", Some("1".into())), ("areaId", None)]
            ),
            "restaurant/tables?branchId=1"
        );
        assert_eq!(
            with_query("x", &[("a", Some("1".into())), ("b", Some("2".into()))]),
            "x?a=1&b=2"
        );
    }

    #[test]
    fn test_into_data() {
        assert_eq!(into_data(ApiResponse::ok(5)).unwrap(), 5);

        let err = into_data(ApiResponse::<i32>::error("Hết món")).unwrap_err();
        assert!(matches!(err, ClientError::Api { message, .. } if message == "Hết món"));

        let empty = ApiResponse::<i32> { success: true, message: None, data: None };
        assert!(matches!(into_data(empty), Err(ClientError::InvalidResponse(_))));
    }
}
