//! 远程存储客户端接口：适配器只依赖本 trait，不依赖具体的网络实现。
//!
//! 默认实现为 [`crate::disk::YandexDiskClient`]；测试可换成内存实现。

use async_trait::async_trait;
use bytes::Bytes;

use crate::internal::disk::error::ClientError;
use crate::internal::disk::raw_json::raw_resource::RemoteResource;
use crate::internal::disk::structs::resource_listeners::ResourceListeners;

/// 所有路径参数都是带根前缀的完整远程路径（如 `disk:/foo`）。
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// 是否持有访问令牌；适配器构造时据此拒绝匿名客户端
    fn has_access_token(&self) -> bool;

    /// 读取资源元数据；`limit > 0` 时目录会带上从 `offset` 开始的一页子项
    async fn get_resource(
        &self,
        path: &str,
        limit: u32,
        offset: u32,
    ) -> Result<RemoteResource, ClientError>;

    /// 资源是否存在。不存在返回 `Ok(false)`，其余错误原样返回
    async fn has(&self, path: &str) -> Result<bool, ClientError> {
        match self.get_resource(path, 0, 0).await {
            Ok(_) => Ok(true),
            Err(ClientError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// 上传文件内容；`overwrite` 为 false 且目标已存在时返回 `AlreadyExists`
    async fn upload(
        &self,
        path: &str,
        body: Bytes,
        overwrite: bool,
        listeners: &ResourceListeners,
    ) -> Result<(), ClientError>;

    /// 下载文件完整内容
    async fn download(&self, path: &str) -> Result<Bytes, ClientError>;

    /// 移动（重命名），目标已存在时返回 `AlreadyExists`
    async fn move_to(&self, from: &str, to: &str) -> Result<(), ClientError>;

    /// 复制，目标已存在时返回 `AlreadyExists`
    async fn copy_to(&self, from: &str, to: &str) -> Result<(), ClientError>;

    /// 删除，目录会连同子项一起删除；`permanently` 为 false 时进回收站
    async fn delete(&self, path: &str, permanently: bool) -> Result<(), ClientError>;

    /// 创建单层目录，父目录必须已存在
    async fn create_dir(
        &self,
        path: &str,
        listeners: &ResourceListeners,
    ) -> Result<(), ClientError>;

    /// 发布或取消发布，返回操作后的资源元数据
    async fn set_publish(
        &self,
        path: &str,
        publish: bool,
    ) -> Result<RemoteResource, ClientError>;
}
