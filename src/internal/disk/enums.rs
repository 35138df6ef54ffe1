use reqwest::Method;

/// 用到的 REST 接口，路径相对于 API 根地址
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskEndpoint {
    /// 元数据查询、创建目录、删除
    Resources,
    /// 获取上传地址
    Upload,
    /// 获取下载地址
    Download,
    Move,
    Copy,
    Publish,
    Unpublish,
}

impl DiskEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiskEndpoint::Resources => "resources",
            DiskEndpoint::Upload => "resources/upload",
            DiskEndpoint::Download => "resources/download",
            DiskEndpoint::Move => "resources/move",
            DiskEndpoint::Copy => "resources/copy",
            DiskEndpoint::Publish => "resources/publish",
            DiskEndpoint::Unpublish => "resources/unpublish",
        }
    }

    /// 除 Resources 外每个接口只对应一种方法；Resources 的方法由调用方决定
    pub fn method(&self) -> Method {
        match self {
            DiskEndpoint::Resources
            | DiskEndpoint::Upload
            | DiskEndpoint::Download => Method::GET,
            DiskEndpoint::Move | DiskEndpoint::Copy => Method::POST,
            DiskEndpoint::Publish | DiskEndpoint::Unpublish => Method::PUT,
        }
    }
}

/// 资源事件，监听器按事件注册
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceEventKind {
    /// 上传完成
    Uploaded,
    /// 目录创建完成
    Created,
}

impl ResourceEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceEventKind::Uploaded => "uploaded",
            ResourceEventKind::Created => "created",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "uploaded" => Some(ResourceEventKind::Uploaded),
            "created" => Some(ResourceEventKind::Created),
            _ => None,
        }
    }
}
