//! 脚本输出模块
//!
//! # 设计思路
//!
//! 统一管理生成脚本的落盘路径，父目录不存在时自动创建，
//! 避免上层判断。
//!
//! # 实现思路
//!
//! - 输出路径为空时直接拒绝，不产生半成品文件。
//! - 父目录不存在时自动 `create_dir_all`。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::AppError;

/// 输出结果信息
#[derive(Debug, Clone, Serialize)]
pub struct OutputInfo {
    pub path: String,
    pub bytes_written: u64,
}

/// 将生成的脚本写入目标路径
///
/// # 参数
/// * `path` - 输出文件路径
/// * `text` - 脚本文本
///
/// # 返回
/// - `Ok(OutputInfo)` — 实际写入路径与字节数
/// - `Err(AppError::Output)` — 路径非法或目录创建失败
pub fn write_script(path: &Path, text: &str) -> Result<OutputInfo, AppError> {
    if path.as_os_str().is_empty() {
        return Err(AppError::Output("输出路径不能为空".to_string()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Output(format!("创建输出目录 '{}' 失败: {}", parent.display(), e))
            })?;
        }
    }

    fs::write(path, text)?;

    Ok(OutputInfo {
        path: path.to_string_lossy().to_string(),
        bytes_written: text.len() as u64,
    })
}
