//! 适配器对外暴露的错误类型。
//!
//! 大多数操作失败时只返回 `None` / `false`，只有移动、复制、删除会区分
//! 「目标已存在」与「源不存在」两种情况，另外几个变体只在构造阶段出现。

use thiserror::Error;

use crate::internal::disk::error::ClientError;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// 目标路径已被占用，携带调用方传入的目标路径
    #[error("目标已存在: {0}")]
    AlreadyExists(String),

    /// 源路径不存在，携带调用方传入的源路径
    #[error("文件不存在: {0}")]
    NotFound(String),

    #[error("未设置访问令牌")]
    MissingAccessToken,

    #[error("不支持的驱动: {0}")]
    UnsupportedDriver(String),

    #[error("配置错误: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Client(#[from] ClientError),
}
