use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

use crate::internal::adapter::enums::Visibility;
use crate::internal::adapter::error::AdapterError;
use crate::internal::adapter::structs::disk_adapter::DiskAdapter;
use crate::internal::adapter::structs::entry::{Entry, FileContents, FileStream};
use crate::internal::adapter::structs::write_options::WriteOptions;
use crate::internal::adapter::traits::filesystem_adapter::FilesystemAdapter;
use crate::internal::disk::error::ClientError;
use crate::internal::disk::traits::storage_client::StorageClient;

/// 读完整个流；读失败时按写入失败处理
async fn drain_stream(
    path: &str,
    stream: &mut (dyn AsyncRead + Unpin + Send),
) -> Option<Bytes> {
    let mut buf = Vec::new();
    match stream.read_to_end(&mut buf).await {
        Ok(_) => Some(Bytes::from(buf)),
        Err(e) => {
            warn!(path, error = %e, "读取待上传的流失败");
            None
        }
    }
}

/// 移动、复制、删除共用的错误转换：只有这两种情况交给调用方处理
fn conflict_result(
    result: Result<(), ClientError>,
    source: &str,
    destination: &str,
) -> Result<bool, AdapterError> {
    match result {
        Ok(()) => Ok(true),
        Err(ClientError::AlreadyExists(_)) => {
            Err(AdapterError::AlreadyExists(destination.to_string()))
        }
        Err(ClientError::NotFound(_)) => Err(AdapterError::NotFound(source.to_string())),
        Err(e) => {
            warn!(source, destination, error = %e, "远程操作失败");
            Ok(false)
        }
    }
}

#[async_trait]
impl<C: StorageClient> FilesystemAdapter for DiskAdapter<C> {
    async fn write(&self, path: &str, contents: &[u8], options: &WriteOptions) -> Option<Entry> {
        self.upload_and_describe(path, Bytes::copy_from_slice(contents), false, options)
            .await
    }

    async fn write_stream(
        &self,
        path: &str,
        stream: &mut (dyn AsyncRead + Unpin + Send),
        options: &WriteOptions,
    ) -> Option<Entry> {
        let body = drain_stream(path, stream).await?;
        self.upload_and_describe(path, body, false, options).await
    }

    async fn update(&self, path: &str, contents: &[u8], options: &WriteOptions) -> Option<Entry> {
        self.upload_and_describe(path, Bytes::copy_from_slice(contents), true, options)
            .await
    }

    async fn update_stream(
        &self,
        path: &str,
        stream: &mut (dyn AsyncRead + Unpin + Send),
        options: &WriteOptions,
    ) -> Option<Entry> {
        let body = drain_stream(path, stream).await?;
        self.upload_and_describe(path, body, true, options).await
    }

    async fn rename(&self, path: &str, new_path: &str) -> Result<bool, AdapterError> {
        let prefixer = self.prefixer();
        let result = self
            .client()
            .move_to(&prefixer.apply(path), &prefixer.apply(new_path))
            .await;

        conflict_result(result, path, new_path)
    }

    async fn copy(&self, path: &str, new_path: &str) -> Result<bool, AdapterError> {
        let prefixer = self.prefixer();
        let result = self
            .client()
            .copy_to(&prefixer.apply(path), &prefixer.apply(new_path))
            .await;

        conflict_result(result, path, new_path)
    }

    async fn delete(&self, path: &str) -> Result<bool, AdapterError> {
        let result = self
            .client()
            .delete(&self.prefixer().apply(path), true)
            .await;

        conflict_result(result, path, path)
    }

    async fn delete_dir(&self, dirname: &str) -> Result<bool, AdapterError> {
        self.delete(dirname).await
    }

    async fn create_dir(&self, dirname: &str, options: &WriteOptions) -> Option<Vec<Entry>> {
        match self.ensure_dir_chain(dirname, options).await {
            Ok(results) if !results.is_empty() => Some(results),
            Ok(_) => None,
            Err(e) => {
                warn!(dirname, error = %e, "创建目录失败");
                None
            }
        }
    }

    async fn set_visibility(&self, path: &str, visibility: &str) -> bool {
        match visibility.parse::<Visibility>() {
            Ok(visibility) => self.apply_visibility(path, visibility).await,
            Err(e) => {
                debug!(path, error = %e, "拒绝设置可见性");
                false
            }
        }
    }

    async fn has(&self, path: &str) -> bool {
        match self.client().has(&self.prefixer().apply(path)).await {
            Ok(exists) => exists,
            Err(e) => {
                warn!(path, error = %e, "检查是否存在失败");
                false
            }
        }
    }

    async fn read(&self, path: &str) -> Option<FileContents> {
        match self.client().download(&self.prefixer().apply(path)).await {
            Ok(contents) => Some(FileContents {
                path: path.to_string(),
                contents,
            }),
            Err(e) => {
                warn!(path, error = %e, "下载失败");
                None
            }
        }
    }

    async fn read_stream(&self, path: &str) -> Option<FileStream> {
        let FileContents { path, contents } = self.read(path).await?;

        Some(FileStream {
            path,
            stream: Cursor::new(contents),
        })
    }

    async fn list_contents(&self, directory: &str, recursive: bool) -> Vec<Entry> {
        // 只裁剪调用方传入的目录，子目录名里的 `.` 和空格要原样保留
        let start = directory.trim_matches(['/', '.', ' ']);

        match self.list_directory(start, recursive).await {
            Ok(listing) => listing,
            Err(e) => {
                warn!(directory, recursive, error = %e, "列目录失败");
                Vec::new()
            }
        }
    }

    async fn get_metadata(&self, path: &str) -> Option<Entry> {
        self.metadata_or_none(path).await
    }

    async fn get_size(&self, path: &str) -> Option<u64> {
        self.metadata_or_none(path).await?.size
    }

    async fn get_mimetype(&self, path: &str) -> Option<String> {
        self.metadata_or_none(path).await?.mime_type
    }

    async fn get_timestamp(&self, path: &str) -> Option<i64> {
        self.metadata_or_none(path).await?.timestamp
    }

    async fn get_visibility(&self, path: &str) -> Option<Visibility> {
        Some(self.metadata_or_none(path).await?.visibility)
    }
}
