//! 远程客户端错误类型。

use thiserror::Error;

use crate::internal::disk::raw_json::raw_resource::ApiErrorBody;

/// 目标已存在时服务端返回的错误码
const ALREADY_EXISTS_ERROR: &str = "DiskResourceAlreadyExistsError";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("地址格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("令牌包含非法字符，无法放入请求头")]
    InvalidHeader,

    #[error("资源不存在: {0}")]
    NotFound(String),

    #[error("目标资源已存在: {0}")]
    AlreadyExists(String),

    #[error("接口返回错误 {status} {error}: {description}")]
    Api {
        status: u16,
        error: String,
        description: String,
    },

    #[error("异步操作失败: {0}")]
    OperationFailed(String),

    #[error("异步操作等待超时: {0}")]
    OperationTimeout(String),

    #[error("读取数据失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl ClientError {
    /// 根据失败响应的状态码与响应体构造错误，`path` 为本次请求操作的资源路径
    ///
    /// - 404 视为资源不存在
    /// - 409 且错误码为 `DiskResourceAlreadyExistsError` 视为目标已存在
    /// - 其余一律归为接口错误，响应体无法解析时保留原文
    pub fn from_api_failure(status: u16, path: &str, body: &str) -> Self {
        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();

        match (status, parsed) {
            (404, _) => ClientError::NotFound(path.to_string()),
            (409, Some(api)) if api.error == ALREADY_EXISTS_ERROR => {
                ClientError::AlreadyExists(path.to_string())
            }
            (_, Some(api)) => ClientError::Api {
                status,
                error: api.error,
                description: api.description.or(api.message).unwrap_or_default(),
            },
            (_, None) => ClientError::Api {
                status,
                error: String::new(),
                description: body.trim().to_string(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}
