//! 资源管理类接口：移动、复制、删除、建目录、发布。

use reqwest::Method;
use tracing::debug;

use crate::internal::auth::structs::disk_auth::DiskAuth;
use crate::internal::disk::enums::DiskEndpoint;
use crate::internal::disk::error::ClientError;
use crate::internal::disk::functions::request::{
    OperationPolling, endpoint_url, ensure_success, finish_operation,
};

/// 移动或复制；目标已存在时不覆盖
///
/// 冲突报错时携带目标路径，源不存在时携带源路径
pub(crate) async fn transfer_resource(
    disk_auth: &DiskAuth,
    endpoint: DiskEndpoint,
    from: &str,
    to: &str,
    polling: OperationPolling,
) -> Result<(), ClientError> {
    let url = endpoint_url(
        disk_auth,
        endpoint,
        &[("from", from), ("path", to), ("overwrite", "false")],
    )?;

    debug!(from, to, endpoint = endpoint.as_str(), "移动/复制资源");

    let res = disk_auth
        .client
        .request(endpoint.method(), url)
        .send()
        .await?;

    let res = ensure_success(res, from).await.map_err(|e| match e {
        ClientError::AlreadyExists(_) => ClientError::AlreadyExists(to.to_string()),
        other => other,
    })?;

    finish_operation(disk_auth, res, from, polling).await
}

pub(crate) async fn delete_resource(
    disk_auth: &DiskAuth,
    path: &str,
    permanently: bool,
    polling: OperationPolling,
) -> Result<(), ClientError> {
    let permanently_text = if permanently { "true" } else { "false" };
    let url = endpoint_url(
        disk_auth,
        DiskEndpoint::Resources,
        &[("path", path), ("permanently", permanently_text)],
    )?;

    debug!(path, permanently, "删除资源");

    let res = disk_auth.client.delete(url).send().await?;
    let res = ensure_success(res, path).await?;

    finish_operation(disk_auth, res, path, polling).await
}

pub(crate) async fn create_folder(
    disk_auth: &DiskAuth,
    path: &str,
) -> Result<(), ClientError> {
    let url = endpoint_url(disk_auth, DiskEndpoint::Resources, &[("path", path)])?;

    debug!(path, "创建目录");

    let res = disk_auth.client.request(Method::PUT, url).send().await?;
    ensure_success(res, path).await?;

    Ok(())
}

pub(crate) async fn publish_resource(
    disk_auth: &DiskAuth,
    path: &str,
    publish: bool,
) -> Result<(), ClientError> {
    let endpoint = if publish {
        DiskEndpoint::Publish
    } else {
        DiskEndpoint::Unpublish
    };
    let url = endpoint_url(disk_auth, endpoint, &[("path", path)])?;

    debug!(path, publish, "修改发布状态");

    let res = disk_auth
        .client
        .request(endpoint.method(), url)
        .send()
        .await?;
    ensure_success(res, path).await?;

    Ok(())
}
