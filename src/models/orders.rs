use serde::{Deserialize, Serialize};
use serde_json::Value;

// ================= Order Lookup DTOs =================

/// 查询表单的当前状态，每次点击查询时重新读取一份
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderForm {
    pub order_id: String,
    /// 为空表示不加 from_date 参数
    pub from_date: String,
    /// 为空表示不加 until_date 参数
    pub until_date: String,
}

// 后端把 items 当数字发，order_id / time 是字符串，统一用 Value 原样透传。
// 字段缺失时落到 Null，渲染成空文本，不算错误。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(default)]
    pub order_id: Value,
    #[serde(default)]
    pub items: Value,
    #[serde(default)]
    pub time: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub order_details: Vec<OrderDetail>,
    #[serde(default)]
    pub total_items: Value,
    #[serde(default)]
    pub total_time: Value,
}

/// 非 2xx 时的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: String,
}
