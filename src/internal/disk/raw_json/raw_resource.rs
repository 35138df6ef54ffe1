use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 对应接口返回的 `Resource` 对象，文件和目录共用
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteResource {
    /// 带根前缀的完整路径，如 `disk:/foo/bar.txt`
    pub path: String,

    /// `type`：文件或目录
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    #[serde(default)]
    pub name: Option<String>,

    /// 文件大小（字节），目录没有此字段
    #[serde(default)]
    pub size: Option<u64>,

    #[serde(default)]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub md5: Option<String>,

    #[serde(default)]
    pub sha256: Option<String>,

    /// 创建时间（ISO8601）
    #[serde(default)]
    pub created: Option<String>,

    /// 最后修改时间（ISO8601），标准化时转换为时间戳
    #[serde(default)]
    pub modified: Option<String>,

    /// 发布后才会出现，是判断是否公开的依据
    #[serde(default)]
    pub public_key: Option<String>,

    #[serde(default)]
    pub public_url: Option<String>,

    #[serde(default)]
    pub resource_id: Option<String>,

    #[serde(default)]
    pub revision: Option<u64>,

    #[serde(default)]
    pub media_type: Option<String>,

    /// 目录的分页子项，只有按目录查询时才会出现
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<ResourceList>,

    /// 其余未建模的字段原样保留（preview、custom_properties 等）
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `type` 字段
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    File,
    Dir,
}

/// 对应 `_embedded` 节点：目录的一页子项
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ResourceList {
    #[serde(default)]
    pub items: Vec<RemoteResource>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
    /// 目录下子项总数，分页依据
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// 对应 `Link` 对象：上传、下载地址或异步操作状态地址
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub templated: Option<bool>,
}

/// 异步操作状态，`GET operations/{id}` 的响应
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OperationStatus {
    pub status: String,
}

/// 接口错误响应体
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
