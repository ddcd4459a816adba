//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，替代各模块中分散的
//! `.map_err(|e| e.to_string())`、`format!(...)`、`expect()` 等不一致模式。
//!
//! 命令行入口统一处理 `Result<T, AppError>`，失败时记录日志并以
//! 非零退出码结束进程。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `CompileError` / `PanelError` 提供 `From` 转换，无需手动 map。

use crate::compiler::CompileError;
use crate::panel::PanelError;

/// 应用级统一错误类型
///
/// 命令行入口只处理此类型，确保用户收到一致的错误格式。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图片编译流水线错误（读取 / 解码 / 生成）
    #[error("{0}")]
    Compile(#[from] CompileError),

    /// 面板参数错误（名称 / 面 / 颜色）
    #[error("{0}")]
    Panel(#[from] PanelError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 输出写入失败
    #[error("输出写入失败: {0}")]
    Output(String),
}
