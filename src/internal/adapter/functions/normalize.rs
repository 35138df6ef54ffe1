use chrono::DateTime;

use crate::internal::adapter::enums::{EntryType, Visibility};
use crate::internal::adapter::structs::entry::Entry;
use crate::internal::adapter::structs::path_prefixer::PathPrefixer;
use crate::internal::disk::raw_json::raw_resource::{RemoteResource, ResourceType};

/// 由路径拆出来的各部分，只依赖路径字符串本身
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    /// 父目录，顶层条目为空串
    pub dirname: String,
    pub basename: String,
    /// 最后一个 `.` 之后的部分，没有 `.` 时为空
    pub extension: Option<String>,
    /// 去掉扩展名后的 basename
    pub filename: String,
}

pub fn path_info(path: &str) -> PathInfo {
    let trimmed = path.trim_end_matches('/');

    let (dirname, basename) = match trimmed.rsplit_once('/') {
        Some((dir, base)) => (dir.trim_end_matches('/'), base),
        None => ("", trimmed),
    };

    let (filename, extension) = match basename.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext.to_string())),
        None => (basename, None),
    };

    PathInfo {
        dirname: dirname.to_string(),
        basename: basename.to_string(),
        extension,
        filename: filename.to_string(),
    }
}

/// 解析修改时间为 Unix 秒，优先 RFC 3339，其次 RFC 2822
pub fn parse_timestamp(modified: Option<&str>) -> Option<i64> {
    let modified = modified?.trim();

    DateTime::parse_from_rfc3339(modified)
        .or_else(|_| DateTime::parse_from_rfc2822(modified))
        .map(|dt| dt.timestamp())
        .ok()
}

/// 把远程资源转换为标准条目
///
/// 文件缺少 size 时记为 0，目录即使远程给了 size 也丢弃
pub fn normalize_resource(resource: &RemoteResource, prefixer: &PathPrefixer) -> Entry {
    let path = prefixer
        .remove(&resource.path)
        .trim_start_matches(['/', ' '])
        .to_string();

    let PathInfo {
        dirname,
        basename,
        extension,
        filename,
    } = path_info(&path);

    let (entry_type, size) = match resource.resource_type {
        ResourceType::File => (EntryType::File, Some(resource.size.unwrap_or(0))),
        ResourceType::Dir => (EntryType::Dir, None),
    };

    Entry {
        path,
        entry_type,
        size,
        timestamp: parse_timestamp(resource.modified.as_deref()),
        visibility: Visibility::from_published(resource.is_published()),
        dirname,
        basename,
        extension,
        filename,
        name: resource.name.clone(),
        mime_type: resource.mime_type.clone(),
        md5: resource.md5.clone(),
        sha256: resource.sha256.clone(),
        revision: resource.revision,
        media_type: resource.media_type.clone(),
        resource_id: resource.resource_id.clone(),
        public_key: resource.public_key.clone(),
        public_url: resource.public_url.clone(),
        created: resource.created.clone(),
        modified: resource.modified.clone(),
        extra: resource.extra.clone(),
    }
}
