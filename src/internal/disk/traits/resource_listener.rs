//! 资源事件监听接口：客户端在上传、建目录等网络请求成功后回调。

use crate::internal::disk::enums::ResourceEventKind;

/// 一次资源事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEvent {
    pub kind: ResourceEventKind,
    /// 带根前缀的远程路径
    pub path: String,
}

/// 资源事件监听器。
///
/// 使用方式二选一（可混用）：
/// - **闭包**：任何 `Fn(&ResourceEvent) + Send + Sync` 都已自动实现本 trait；
/// - **结构体**：自行实现本 trait，适合需要携带状态的监听器。
///
/// 监听器只做通知，不能中止请求。
pub trait ResourceListener: Send + Sync {
    fn on_event(&self, event: &ResourceEvent);
}

impl<F> ResourceListener for F
where
    F: Fn(&ResourceEvent) + Send + Sync,
{
    fn on_event(&self, event: &ResourceEvent) {
        self(event)
    }
}
