use async_recursion::async_recursion;
use bytes::Bytes;
use tracing::warn;

use crate::internal::adapter::enums::{PathPrefix, Visibility};
use crate::internal::adapter::error::AdapterError;
use crate::internal::adapter::functions::normalize::normalize_resource;
use crate::internal::adapter::structs::entry::Entry;
use crate::internal::adapter::structs::path_prefixer::PathPrefixer;
use crate::internal::adapter::structs::write_options::WriteOptions;
use crate::internal::disk::error::ClientError;
use crate::internal::disk::traits::storage_client::StorageClient;

/// 列目录时每页条数
pub const LIST_PAGE_SIZE: u32 = 100;

/// 带根前缀的远程目录适配器
///
/// 除了构造时固定下来的前缀外不持有任何状态，每次调用都直接访问远程
#[derive(Debug)]
pub struct DiskAdapter<C: StorageClient> {
    client: C,
    prefixer: PathPrefixer,
}

impl<C: StorageClient> DiskAdapter<C> {
    /// 创建适配器；客户端没有令牌时拒绝创建
    pub fn new(client: C, prefix: PathPrefix) -> Result<Self, AdapterError> {
        if !client.has_access_token() {
            return Err(AdapterError::MissingAccessToken);
        }

        Ok(Self {
            client,
            prefixer: PathPrefixer::new(prefix),
        })
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn prefixer(&self) -> &PathPrefixer {
        &self.prefixer
    }

    /// 已发布资源的公开链接，未发布或读取失败时为空
    pub async fn get_public_url(&self, path: &str) -> Option<String> {
        self.metadata_or_none(path).await?.public_url
    }

    pub(crate) async fn fetch_entry(&self, path: &str) -> Result<Entry, ClientError> {
        let resource = self
            .client
            .get_resource(&self.prefixer.apply(path), 0, 0)
            .await?;

        Ok(normalize_resource(&resource, &self.prefixer))
    }

    pub(crate) async fn metadata_or_none(&self, path: &str) -> Option<Entry> {
        match self.fetch_entry(path).await {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(path, error = %e, "读取元数据失败");
                None
            }
        }
    }

    /// 上传后重新读取元数据；需要时再设置可见性
    pub(crate) async fn upload_and_describe(
        &self,
        path: &str,
        body: Bytes,
        overwrite: bool,
        options: &WriteOptions,
    ) -> Option<Entry> {
        let remote_path = self.prefixer.apply(path);

        if let Err(e) = self
            .client
            .upload(&remote_path, body, overwrite, &options.listeners)
            .await
        {
            warn!(path, overwrite, error = %e, "上传失败");
            return None;
        }

        let mut entry = self.metadata_or_none(path).await?;

        if let Some(visibility) = options.visibility {
            if self.apply_visibility(path, visibility).await {
                entry.visibility = visibility;
            }
        }

        Some(entry)
    }

    /// 当前状态已符合时不发请求；否则只有远程确认切换成功才返回 true
    pub(crate) async fn apply_visibility(&self, path: &str, visibility: Visibility) -> bool {
        let remote_path = self.prefixer.apply(path);
        let want_public = visibility.is_public();

        let current = match self.client.get_resource(&remote_path, 0, 0).await {
            Ok(resource) => resource,
            Err(e) => {
                warn!(path, error = %e, "读取可见性失败");
                return false;
            }
        };

        if current.is_published() == want_public {
            return true;
        }

        match self.client.set_publish(&remote_path, want_public).await {
            Ok(updated) => updated.is_published() == want_public,
            Err(e) => {
                warn!(path, visibility = %visibility, error = %e, "设置可见性失败");
                false
            }
        }
    }

    /// 按段逐级确保目录存在，返回每一级的条目
    ///
    /// 已存在的层级不会再发创建请求；要求公开时只发布最后一级
    pub(crate) async fn ensure_dir_chain(
        &self,
        dirname: &str,
        options: &WriteOptions,
    ) -> Result<Vec<Entry>, ClientError> {
        let segments: Vec<&str> = dirname
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty())
            .collect();

        let mut results = Vec::with_capacity(segments.len());
        let mut relative = String::new();

        for (index, segment) in segments.iter().enumerate() {
            if !relative.is_empty() {
                relative.push('/');
            }
            relative.push_str(segment);

            let remote_path = self.prefixer.apply(&relative);

            let mut resource = match self.client.get_resource(&remote_path, 0, 0).await {
                Ok(resource) => resource,
                Err(ClientError::NotFound(_)) => {
                    self.client
                        .create_dir(&remote_path, &options.listeners)
                        .await?;
                    self.client.get_resource(&remote_path, 0, 0).await?
                }
                Err(e) => return Err(e),
            };

            let is_leaf = index + 1 == segments.len();
            if is_leaf
                && options.visibility == Some(Visibility::Public)
                && !resource.is_published()
            {
                resource = self.client.set_publish(&remote_path, true).await?;
            }

            results.push(normalize_resource(&resource, &self.prefixer));
        }

        Ok(results)
    }

    /// 分页读取目录，需要时递归子目录
    ///
    /// `directory` 必须是已整理好的相对路径，这里不再做任何裁剪，
    /// 子目录直接使用远程返回的路径。
    /// 任何一次请求失败都会让整个调用失败，不返回部分结果
    #[async_recursion]
    pub(crate) async fn list_directory(
        &self,
        directory: &str,
        recursive: bool,
    ) -> Result<Vec<Entry>, ClientError> {
        let remote_path = self.prefixer.apply(directory);

        let mut page = self
            .client
            .get_resource(&remote_path, LIST_PAGE_SIZE, 0)
            .await?;

        if !page.is_dir() {
            return Ok(Vec::new());
        }

        let limit = page.page_limit(LIST_PAGE_SIZE);
        let pages = page.total_items().div_ceil(limit).max(1);
        let mut listing = Vec::new();

        for page_index in 1..=pages {
            for item in page.items() {
                listing.push(normalize_resource(item, &self.prefixer));

                if recursive && item.is_dir() {
                    let child = self.prefixer.remove(&item.path).to_string();
                    listing.extend(self.list_directory(&child, true).await?);
                }
            }

            if page_index < pages {
                page = self
                    .client
                    .get_resource(&remote_path, limit, limit * page_index)
                    .await?;
            }
        }

        Ok(listing)
    }
}
