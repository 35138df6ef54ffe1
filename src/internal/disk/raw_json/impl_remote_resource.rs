use serde_json::Value;

use crate::internal::disk::raw_json::raw_resource::{RemoteResource, ResourceType};

impl RemoteResource {
    pub fn is_file(&self) -> bool {
        self.resource_type == ResourceType::File
    }

    pub fn is_dir(&self) -> bool {
        self.resource_type == ResourceType::Dir
    }

    /// 是否已发布（公开），以 `public_key` 是否存在为准
    pub fn is_published(&self) -> bool {
        self.public_key.is_some()
    }

    /// 当前这一页的子项，非目录或未请求分页时为空
    pub fn items(&self) -> &[RemoteResource] {
        self.embedded
            .as_ref()
            .map(|list| list.items.as_slice())
            .unwrap_or(&[])
    }

    /// 目录子项总数；服务端没给 total 时退回当前页的条数
    pub fn total_items(&self) -> u32 {
        self.embedded
            .as_ref()
            .map(|list| list.total.unwrap_or(list.items.len() as u32))
            .unwrap_or(0)
    }

    /// 服务端实际采用的分页大小，没有时返回 `default`
    pub fn page_limit(&self, default: u32) -> u32 {
        self.embedded
            .as_ref()
            .and_then(|list| list.limit)
            .filter(|limit| *limit > 0)
            .unwrap_or(default)
    }

    /// 按字段名读取任意字段（含未建模字段），不存在时返回 `default`
    pub fn get(&self, field: &str, default: Value) -> Value {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => map
                .remove(field)
                .filter(|value| !value.is_null())
                .unwrap_or(default),
            _ => default,
        }
    }
}
