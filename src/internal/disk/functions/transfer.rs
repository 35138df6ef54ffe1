//! 上传与下载：先向接口申请一次性地址，再对该地址传输内容。

use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use tracing::debug;

use crate::internal::auth::structs::disk_auth::DiskAuth;
use crate::internal::disk::enums::DiskEndpoint;
use crate::internal::disk::error::ClientError;
use crate::internal::disk::functions::request::{endpoint_url, ensure_success};
use crate::internal::disk::raw_json::raw_resource::Link;

/// 下载时预分配缓冲区的上限，超出部分随读取增长
pub(crate) const MAX_PREALLOCATE_BYTES: u64 = 8 * 1024 * 1024;

/// Content-Length 来自下载节点，只作为预分配的参考
pub(crate) fn preallocate_capacity(content_length: Option<u64>) -> usize {
    content_length.unwrap_or(0).min(MAX_PREALLOCATE_BYTES) as usize
}

async fn request_link(
    disk_auth: &DiskAuth,
    endpoint: DiskEndpoint,
    query: &[(&str, &str)],
    path: &str,
) -> Result<Link, ClientError> {
    let url = endpoint_url(disk_auth, endpoint, query)?;
    let res = disk_auth
        .client
        .request(endpoint.method(), url)
        .send()
        .await?;
    let res = ensure_success(res, path).await?;

    Ok(res.json::<Link>().await?)
}

/// 上传整个文件内容
pub(crate) async fn upload_file(
    disk_auth: &DiskAuth,
    path: &str,
    body: Bytes,
    overwrite: bool,
) -> Result<(), ClientError> {
    let overwrite_text = if overwrite { "true" } else { "false" };
    let link = request_link(
        disk_auth,
        DiskEndpoint::Upload,
        &[("path", path), ("overwrite", overwrite_text)],
        path,
    )
    .await?;

    debug!(path, bytes = body.len(), overwrite, "上传文件");

    let res = disk_auth.client.put(&link.href).body(body).send().await?;
    ensure_success(res, path).await?;

    Ok(())
}

/// 下载整个文件内容到内存，流式读取避免一次性缓冲两份
pub(crate) async fn download_file(
    disk_auth: &DiskAuth,
    path: &str,
) -> Result<Bytes, ClientError> {
    let link = request_link(
        disk_auth,
        DiskEndpoint::Download,
        &[("path", path)],
        path,
    )
    .await?;

    debug!(path, "下载文件");

    let res = disk_auth.client.get(&link.href).send().await?;
    let res = ensure_success(res, path).await?;

    let mut out_bytes = BytesMut::with_capacity(preallocate_capacity(res.content_length()));

    let mut stream = res.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        out_bytes.extend_from_slice(&chunk);
    }

    Ok(out_bytes.freeze())
}
