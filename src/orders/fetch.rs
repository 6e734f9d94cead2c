use log::info;
use reqwest::Client;

use crate::{
    errors::CustomError,
    models::orders::{ApiError, OrderForm, OrderResponse},
    orders::query::build_query,
};

/// 发一次 GET 并解析响应。2xx 解析成 OrderResponse，
/// 非 2xx 解析 body 里的 error 字段，网络或解析失败走 `?` 冒泡。
/// 不重试、不设超时，一次调用只有一次请求。
pub async fn fetch_orders(
    client: &Client,
    base_url: &str,
    form: &OrderForm,
) -> Result<OrderResponse, CustomError> {
    let url = format!("{}{}", base_url, build_query(form));
    info!("GET request to {}", url);

    let response = client.get(&url).send().await?;
    let ok = response.status().is_success();
    let body = response.text().await?;

    if ok {
        Ok(serde_json::from_str(&body)?)
    } else {
        let err: ApiError = serde_json::from_str(&body)?;
        Err(CustomError::ApiError(err.error))
    }
}
