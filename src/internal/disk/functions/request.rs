//! 请求公共部分：拼接接口地址、检查响应状态、等待异步操作。

use std::time::Duration;

use reqwest::{Response, StatusCode};
use tracing::debug;
use url::Url;

use crate::internal::auth::structs::disk_auth::DiskAuth;
use crate::internal::disk::enums::DiskEndpoint;
use crate::internal::disk::error::ClientError;
use crate::internal::disk::raw_json::raw_resource::{Link, OperationStatus};

/// 异步操作的轮询设置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationPolling {
    pub interval: Duration,
    pub max_attempts: u32,
}

/// 默认轮询间隔（毫秒）
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// 默认最大轮询次数
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 40;

impl Default for OperationPolling {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

/// 拼接接口地址与查询参数，参数值会被正确编码
pub(crate) fn endpoint_url(
    disk_auth: &DiskAuth,
    endpoint: DiskEndpoint,
    query: &[(&str, &str)],
) -> Result<Url, ClientError> {
    let mut url = disk_auth.base_url.join(endpoint.as_str())?;

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}

/// 2xx 原样返回，否则读取响应体并转换为对应的错误
pub(crate) async fn ensure_success(
    res: Response,
    path: &str,
) -> Result<Response, ClientError> {
    let status = res.status();

    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();

    Err(ClientError::from_api_failure(status.as_u16(), path, &body))
}

/// 处理可能是异步执行的接口（移动、复制、删除）
///
/// 202 表示服务端转入后台执行，响应体是操作状态的地址，需要轮询到结束
pub(crate) async fn finish_operation(
    disk_auth: &DiskAuth,
    res: Response,
    path: &str,
    polling: OperationPolling,
) -> Result<(), ClientError> {
    if res.status() != StatusCode::ACCEPTED {
        return Ok(());
    }

    let link: Link = res.json().await?;
    wait_operation(disk_auth, &link.href, path, polling).await
}

async fn wait_operation(
    disk_auth: &DiskAuth,
    href: &str,
    path: &str,
    polling: OperationPolling,
) -> Result<(), ClientError> {
    for attempt in 0..polling.max_attempts {
        let res = disk_auth.client.get(href).send().await?;
        let res = ensure_success(res, path).await?;
        let operation: OperationStatus = res.json().await?;

        debug!(path, attempt, status = %operation.status, "轮询异步操作");

        match operation.status.as_str() {
            "success" => return Ok(()),
            "failed" => return Err(ClientError::OperationFailed(path.to_string())),
            _ => tokio::time::sleep(polling.interval).await,
        }
    }

    Err(ClientError::OperationTimeout(path.to_string()))
}
