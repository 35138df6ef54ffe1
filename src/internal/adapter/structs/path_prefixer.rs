use crate::internal::adapter::enums::PathPrefix;

/// 路径前缀转换：发出请求前加上根前缀，拿到远程路径后去掉
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPrefixer {
    prefix: PathPrefix,
}

impl PathPrefixer {
    pub fn new(prefix: PathPrefix) -> Self {
        Self { prefix }
    }

    pub fn prefix(&self) -> PathPrefix {
        self.prefix
    }

    /// 相对路径 → 远程完整路径，开头多余的分隔符会被去掉
    pub fn apply(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.prefix.as_str(),
            path.trim_start_matches(['/', '\\'])
        )
    }

    /// 远程完整路径 → 相对路径；不带本前缀的路径原样返回
    pub fn remove<'a>(&self, path: &'a str) -> &'a str {
        path.strip_prefix(self.prefix.as_str()).unwrap_or(path)
    }
}
