use std::io::Cursor;

use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::internal::adapter::enums::{EntryType, Visibility};

/// 标准化后的单个远程文件或目录
///
/// - `path` 不含根前缀，也不以 `/` 开头
/// - 文件一定有 `size`，目录一定没有
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// 最后修改时间（Unix 秒），无法解析时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub visibility: Visibility,

    // 由 path 推导出的路径各部分
    pub dirname: String,
    pub basename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    pub filename: String,

    // 远程字段原样透传
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }

    /// 转为通用的键值结构
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// `read` 的结果：整个文件内容
#[derive(Debug, Clone, PartialEq)]
pub struct FileContents {
    pub path: String,
    pub contents: Bytes,
}

/// `read_stream` 的结果：已定位到开头、可异步读取的内容
#[derive(Debug)]
pub struct FileStream {
    pub path: String,
    pub stream: Cursor<Bytes>,
}
