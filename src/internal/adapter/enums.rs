use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 根前缀：决定操作整个网盘还是仅操作应用目录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PathPrefix {
    /// 整个网盘
    #[default]
    #[serde(rename = "disk:/", alias = "disk")]
    Disk,
    /// 应用目录
    #[serde(rename = "app:/", alias = "app")]
    App,
}

impl PathPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathPrefix::Disk => "disk:/",
            PathPrefix::App => "app:/",
        }
    }
}

impl FromStr for PathPrefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "disk:/" | "disk" => Ok(PathPrefix::Disk),
            "app:/" | "app" => Ok(PathPrefix::App),
            other => Err(format!("未知的根前缀: {other}")),
        }
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 可见性，对应远程资源是否已发布
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    pub fn is_public(&self) -> bool {
        *self == Visibility::Public
    }

    pub fn from_published(published: bool) -> Self {
        if published {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

/// 只接受 "public" 和 "private"，大小写敏感
impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(format!("不支持的可见性: {other}")),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
}
