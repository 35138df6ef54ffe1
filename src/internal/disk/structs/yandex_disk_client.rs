use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::internal::auth::structs::disk_auth::DiskAuth;
use crate::internal::disk::enums::{DiskEndpoint, ResourceEventKind};
use crate::internal::disk::error::ClientError;
use crate::internal::disk::functions::get_resource_raw_data::get_resource_raw_data;
use crate::internal::disk::functions::manage::{
    create_folder, delete_resource, publish_resource, transfer_resource,
};
use crate::internal::disk::functions::request::OperationPolling;
use crate::internal::disk::functions::transfer::{download_file, upload_file};
use crate::internal::disk::raw_json::raw_resource::RemoteResource;
use crate::internal::disk::structs::resource_listeners::ResourceListeners;
use crate::internal::disk::traits::storage_client::StorageClient;

/// 基于 REST API 的 Yandex.Disk 客户端
///
/// 本身不持有任何可变状态，克隆代价很低（内部都是 Arc）
#[derive(Debug, Clone)]
pub struct YandexDiskClient {
    disk_auth: DiskAuth,
    polling: OperationPolling,
}

impl YandexDiskClient {
    pub fn new(disk_auth: DiskAuth) -> Self {
        Self {
            disk_auth,
            polling: OperationPolling::default(),
        }
    }

    /// 设置异步操作（移动、复制、删除大目录）的轮询间隔
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.polling.interval = interval;
        self
    }

    /// 设置异步操作的最大轮询次数，超过后返回 `OperationTimeout`
    pub fn with_max_poll_attempts(mut self, max_attempts: u32) -> Self {
        self.polling.max_attempts = max_attempts;
        self
    }

    pub fn auth(&self) -> &DiskAuth {
        &self.disk_auth
    }
}

#[async_trait]
impl StorageClient for YandexDiskClient {
    fn has_access_token(&self) -> bool {
        self.disk_auth.has_token()
    }

    async fn get_resource(
        &self,
        path: &str,
        limit: u32,
        offset: u32,
    ) -> Result<RemoteResource, ClientError> {
        get_resource_raw_data(&self.disk_auth, path, limit, offset).await
    }

    async fn upload(
        &self,
        path: &str,
        body: Bytes,
        overwrite: bool,
        listeners: &ResourceListeners,
    ) -> Result<(), ClientError> {
        upload_file(&self.disk_auth, path, body, overwrite).await?;
        listeners.fire(ResourceEventKind::Uploaded, path);
        Ok(())
    }

    async fn download(&self, path: &str) -> Result<Bytes, ClientError> {
        download_file(&self.disk_auth, path).await
    }

    async fn move_to(&self, from: &str, to: &str) -> Result<(), ClientError> {
        transfer_resource(&self.disk_auth, DiskEndpoint::Move, from, to, self.polling).await
    }

    async fn copy_to(&self, from: &str, to: &str) -> Result<(), ClientError> {
        transfer_resource(&self.disk_auth, DiskEndpoint::Copy, from, to, self.polling).await
    }

    async fn delete(&self, path: &str, permanently: bool) -> Result<(), ClientError> {
        delete_resource(&self.disk_auth, path, permanently, self.polling).await
    }

    async fn create_dir(
        &self,
        path: &str,
        listeners: &ResourceListeners,
    ) -> Result<(), ClientError> {
        create_folder(&self.disk_auth, path).await?;
        listeners.fire(ResourceEventKind::Created, path);
        Ok(())
    }

    async fn set_publish(
        &self,
        path: &str,
        publish: bool,
    ) -> Result<RemoteResource, ClientError> {
        publish_resource(&self.disk_auth, path, publish).await?;
        // 发布接口只返回链接，状态需要重新读取
        get_resource_raw_data(&self.disk_auth, path, 0, 0).await
    }
}
