use std::fmt;
use log::error as logError;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub enum CustomError {
    // 服务端返回非 2xx，携带 body 里的 error 字段
    ApiError(String),
    RequestFailed(String),
    ParseFailed(String),
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomError::ApiError(e) => write!(f, "{e}"),
            CustomError::RequestFailed(e) => write!(f, "{e}"),
            CustomError::ParseFailed(e) => write!(f, "{e}"),
        }
    }
}

impl From<reqwest::Error> for CustomError {
    fn from(e: reqwest::Error) -> Self {
        logError!(target: "reqwest", "reqwest error: {:?}", e);
        CustomError::RequestFailed(e.to_string())
    }
}

impl From<serde_json::Error> for CustomError {
    fn from(value: serde_json::Error) -> Self {
        CustomError::ParseFailed(format!("json 数据解析失败: {}", value))
    }
}
