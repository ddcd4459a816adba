//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载编译链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

use crate::panel::PanelError;

/// 图片编译统一错误类型。
///
/// 该类型会在命令行入口被上转为 `AppError`，最终决定进程退出码。
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("{0}")]
    Panel(#[from] PanelError),
}
