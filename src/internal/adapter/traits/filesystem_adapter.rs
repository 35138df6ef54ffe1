//! 通用文件系统接口：上层只面向本 trait 编程，不关心背后是哪种远程存储。
//!
//! 所有路径都是相对路径（不含根前缀）。除移动、复制、删除外，失败一律以
//! `None` / `false` / 空列表表示，不向调用方暴露具体原因。

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::internal::adapter::enums::Visibility;
use crate::internal::adapter::error::AdapterError;
use crate::internal::adapter::structs::entry::{Entry, FileContents, FileStream};
use crate::internal::adapter::structs::write_options::WriteOptions;

#[async_trait]
pub trait FilesystemAdapter: Send + Sync {
    /// 写入新文件，目标已存在时失败
    async fn write(&self, path: &str, contents: &[u8], options: &WriteOptions) -> Option<Entry>;

    /// 以流的方式写入新文件
    async fn write_stream(
        &self,
        path: &str,
        stream: &mut (dyn AsyncRead + Unpin + Send),
        options: &WriteOptions,
    ) -> Option<Entry>;

    /// 覆盖写入
    async fn update(&self, path: &str, contents: &[u8], options: &WriteOptions) -> Option<Entry>;

    /// 以流的方式覆盖写入
    async fn update_stream(
        &self,
        path: &str,
        stream: &mut (dyn AsyncRead + Unpin + Send),
        options: &WriteOptions,
    ) -> Option<Entry>;

    /// 重命名（移动）。目标已存在返回 `AlreadyExists`，源不存在返回 `NotFound`
    async fn rename(&self, path: &str, new_path: &str) -> Result<bool, AdapterError>;

    /// 复制。目标已存在返回 `AlreadyExists`，源不存在返回 `NotFound`
    async fn copy(&self, path: &str, new_path: &str) -> Result<bool, AdapterError>;

    /// 永久删除，目录连同子项；不存在返回 `NotFound`
    async fn delete(&self, path: &str) -> Result<bool, AdapterError>;

    async fn delete_dir(&self, dirname: &str) -> Result<bool, AdapterError>;

    /// 逐级创建目录，返回每一级的条目
    async fn create_dir(&self, dirname: &str, options: &WriteOptions) -> Option<Vec<Entry>>;

    /// `visibility` 只接受 "public" / "private"
    async fn set_visibility(&self, path: &str, visibility: &str) -> bool;

    async fn has(&self, path: &str) -> bool;

    async fn read(&self, path: &str) -> Option<FileContents>;

    async fn read_stream(&self, path: &str) -> Option<FileStream>;

    async fn list_contents(&self, directory: &str, recursive: bool) -> Vec<Entry>;

    async fn get_metadata(&self, path: &str) -> Option<Entry>;

    async fn get_size(&self, path: &str) -> Option<u64>;

    async fn get_mimetype(&self, path: &str) -> Option<String>;

    async fn get_timestamp(&self, path: &str) -> Option<i64>;

    async fn get_visibility(&self, path: &str) -> Option<Visibility>;
}
