/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::registry::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::disk_auth::{DEFAULT_API_BASE_URL, DiskAuth};
}

/// 对外提供网盘客户端的基础访问能力，不限制死在适配器中，以防有人自己要用
pub mod disk {
    use crate::internal;
    pub use internal::disk::enums::*;
    pub use internal::disk::error::ClientError;
    pub use internal::disk::functions::request::{
        DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS, OperationPolling,
    };
    pub use internal::disk::raw_json::raw_resource::*;
    pub use internal::disk::structs::resource_listeners::ResourceListeners;
    pub use internal::disk::structs::yandex_disk_client::YandexDiskClient;
    pub use internal::disk::traits::resource_listener::{ResourceEvent, ResourceListener};
    pub use internal::disk::traits::storage_client::StorageClient;
}

pub mod adapter {
    use crate::internal;
    // 结构体模型
    pub use internal::adapter::structs::disk_adapter::{DiskAdapter, LIST_PAGE_SIZE};
    pub use internal::adapter::structs::entry::*;
    pub use internal::adapter::structs::path_prefixer::PathPrefixer;
    pub use internal::adapter::structs::write_options::WriteOptions;
    // 枚举与错误
    pub use internal::adapter::enums::*;
    pub use internal::adapter::error::AdapterError;
    // 标准化函数与文件系统接口
    pub use internal::adapter::functions::normalize::{
        PathInfo, normalize_resource, parse_timestamp, path_info,
    };
    pub use internal::adapter::traits::filesystem_adapter::FilesystemAdapter;
}
