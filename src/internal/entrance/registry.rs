use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::internal::adapter::enums::PathPrefix;
use crate::internal::adapter::error::AdapterError;
use crate::internal::adapter::structs::disk_adapter::DiskAdapter;
use crate::internal::auth::structs::disk_auth::{DEFAULT_API_BASE_URL, DiskAuth};
use crate::internal::disk::structs::yandex_disk_client::YandexDiskClient;

/// 驱动名，配置里的 `driver` 只能是它
pub const DRIVER_NAME: &str = "yandex";

fn default_driver() -> String {
    DRIVER_NAME.to_string()
}

fn default_prefix() -> PathPrefix {
    PathPrefix::App
}

/// 网盘配置，字段名与常见的 `filesystems` 配置一致
///
/// ```json
/// { "driver": "yandex", "access_token": "...", "prefix": "app:/" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiskConfig {
    #[serde(default = "default_driver")]
    pub driver: String,
    pub access_token: String,
    /// 不填时默认只操作应用目录
    #[serde(default = "default_prefix")]
    pub prefix: PathPrefix,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl DiskConfig {
    pub fn new(access_token: &str) -> Self {
        Self {
            driver: default_driver(),
            access_token: access_token.to_string(),
            prefix: default_prefix(),
            api_base_url: None,
        }
    }

    pub fn with_prefix(mut self, prefix: PathPrefix) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn from_json(value: Value) -> Result<Self, AdapterError> {
        serde_json::from_value(value).map_err(|e| AdapterError::InvalidConfig(e.to_string()))
    }

    /// 从字符串键值对读取，未知的键会被忽略
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, AdapterError> {
        let object = map
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect::<serde_json::Map<String, Value>>();

        Self::from_json(Value::Object(object))
    }
}

/// 根据配置创建适配器：认证 → 客户端 → 适配器
pub fn create_disk_adapter(
    config: &DiskConfig,
) -> Result<DiskAdapter<YandexDiskClient>, AdapterError> {
    if config.driver != DRIVER_NAME {
        return Err(AdapterError::UnsupportedDriver(config.driver.clone()));
    }

    let base_url = config
        .api_base_url
        .as_deref()
        .unwrap_or(DEFAULT_API_BASE_URL);

    let disk_auth = DiskAuth::with_base_url(&config.access_token, base_url)?;

    debug!(prefix = %config.prefix, base_url, "创建网盘适配器");

    DiskAdapter::new(YandexDiskClient::new(disk_auth), config.prefix)
}
