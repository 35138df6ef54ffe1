use std::fmt;

use crate::internal::disk::enums::ResourceEventKind;
use crate::internal::disk::traits::resource_listener::{ResourceEvent, ResourceListener};

/// 监听器容器：按事件注册，同一事件按注册顺序依次回调。
#[derive(Default)]
pub struct ResourceListeners {
    listeners: Vec<(ResourceEventKind, Box<dyn ResourceListener>)>,
}

impl ResourceListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为某个事件添加一个监听器；支持多次调用以注册多个
    pub fn add(
        &mut self,
        kind: ResourceEventKind,
        listener: impl ResourceListener + 'static,
    ) {
        self.listeners.push((kind, Box::new(listener)));
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// 触发事件，只回调注册在该事件上的监听器
    pub fn fire(&self, kind: ResourceEventKind, path: &str) {
        if self.listeners.is_empty() {
            return;
        }

        let event = ResourceEvent {
            kind,
            path: path.to_string(),
        };

        for (_, listener) in self.listeners.iter().filter(|(k, _)| *k == kind) {
            listener.on_event(&event);
        }
    }
}

/// 闭包没法 Debug，这里只打印数量
impl fmt::Debug for ResourceListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
