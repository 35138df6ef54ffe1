use crate::internal::adapter::enums::Visibility;
use crate::internal::disk::enums::ResourceEventKind;
use crate::internal::disk::structs::resource_listeners::ResourceListeners;
use crate::internal::disk::traits::resource_listener::ResourceListener;

/// 写入、建目录时的可选项
#[derive(Debug, Default)]
pub struct WriteOptions {
    /// 写入成功后要设置的可见性
    pub visibility: Option<Visibility>,
    /// 交给客户端的事件监听器，在网络请求前注册
    pub listeners: ResourceListeners,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// 注册事件监听器；可链式多次调用，同一事件按注册顺序回调
    pub fn on(
        mut self,
        kind: ResourceEventKind,
        listener: impl ResourceListener + 'static,
    ) -> Self {
        self.listeners.add(kind, listener);
        self
    }

    /// 按事件名注册，未知事件名会被忽略并返回 false
    pub fn on_named(
        &mut self,
        name: &str,
        listener: impl ResourceListener + 'static,
    ) -> bool {
        match ResourceEventKind::parse(name) {
            Some(kind) => {
                self.listeners.add(kind, listener);
                true
            }
            None => false,
        }
    }
}
