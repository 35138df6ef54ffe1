//! 适配器领域模块：路径前缀转换、响应标准化与文件系统接口的实现。

pub mod enums;
pub mod error;
pub mod functions;
pub mod impl_traits;
pub mod structs;
pub mod traits;
