use tracing::debug;

use crate::internal::auth::structs::disk_auth::DiskAuth;
use crate::internal::disk::enums::DiskEndpoint;
use crate::internal::disk::error::ClientError;
use crate::internal::disk::functions::request::{endpoint_url, ensure_success};
use crate::internal::disk::raw_json::raw_resource::RemoteResource;

/// 获取原始资源元数据
///
/// `limit` 为 0 时不带分页参数，由服务端使用默认分页
pub(crate) async fn get_resource_raw_data(
    disk_auth: &DiskAuth,
    path: &str,
    limit: u32,
    offset: u32,
) -> Result<RemoteResource, ClientError> {
    let limit_text = limit.to_string();
    let offset_text = offset.to_string();

    let mut query = vec![("path", path)];
    if limit > 0 {
        query.push(("limit", limit_text.as_str()));
        query.push(("offset", offset_text.as_str()));
    }

    let url = endpoint_url(disk_auth, DiskEndpoint::Resources, &query)?;

    debug!(path, limit, offset, "获取资源元数据");

    let res = disk_auth
        .client
        .request(DiskEndpoint::Resources.method(), url)
        .send()
        .await?;

    let res = ensure_success(res, path).await?;

    Ok(res.json::<RemoteResource>().await?)
}
