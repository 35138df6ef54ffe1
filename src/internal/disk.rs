//! 远程客户端：Yandex.Disk REST API 的请求、模型与错误。

pub mod enums;
pub mod error;
pub mod functions;
pub mod raw_json;
pub mod structs;
pub mod traits;
