//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `CompilerConfig`，保证运行时行为可观测、可调整、可测试。
//! 背景哨兵色作为核心语义参数与资源上限放在同一处，避免散落在各阶段。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用的保守配置（不降采样、黑色背景）。
//! - `parse_background` 负责 `r,g,b` 字符串的解析与范围校验。
//! - `validate` 在构建编译器前拒绝明显不合理的参数组合。

use image::Rgb;
use image::imageops::FilterType;

use super::CompileError;

/// 图片编译配置。
///
/// 字段覆盖了读取、解码、降采样与脚本生成四个阶段。
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// 读取原始字节时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGB 估算，字节）。
    pub max_decoded_bytes: u64,
    /// 是否启用面板分辨率降采样。
    pub adaptive_resize: bool,
    /// 降采样后宽/高单边最大值。
    pub panel_max_dimension: u32,
    /// 降采样滤镜策略。
    pub resize_filter: FilterType,
    /// 背景哨兵色：等于该颜色的像素不生成调用。
    pub background: Rgb<u8>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 4_000_000,
            max_decoded_bytes: 64 * 1024 * 1024,
            adaptive_resize: false,
            panel_max_dimension: 128,
            resize_filter: FilterType::Nearest,
            background: Rgb([0, 0, 0]),
        }
    }
}

impl CompilerConfig {
    /// 从外部字符串解析背景哨兵色。
    ///
    /// 接受 `r,g,b` 形式，每个分量 0~255，允许分量两侧留白。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use panel_painter::compiler::CompilerConfig;
    ///
    /// let bg = CompilerConfig::parse_background("0, 0, 0")?;
    /// assert_eq!(bg.0, [0, 0, 0]);
    /// # Ok::<(), panel_painter::compiler::CompileError>(())
    /// ```
    pub fn parse_background(value: &str) -> Result<Rgb<u8>, CompileError> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(CompileError::InvalidFormat(format!(
                "背景色格式错误：{}（期望 r,g,b 三个分量）",
                value
            )));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|_| {
                CompileError::InvalidFormat(format!(
                    "背景色分量无效：{}（必须是 0~255 的整数）",
                    part
                ))
            })?;
        }

        Ok(Rgb(channels))
    }

    /// 校验参数组合是否可用。
    ///
    /// 在构建 `Compiler` 时调用，尽早拒绝不合理配置。
    pub(crate) fn validate(&self) -> Result<(), CompileError> {
        if self.max_file_size < 1024 {
            return Err(CompileError::InvalidFormat(
                "max_file_size 不能小于 1KB".to_string(),
            ));
        }
        if self.max_decoded_pixels == 0 {
            return Err(CompileError::InvalidFormat(
                "max_decoded_pixels 不能为 0".to_string(),
            ));
        }
        if self.max_decoded_bytes < 3 * 1024 * 1024 {
            return Err(CompileError::InvalidFormat(
                "max_decoded_bytes 不能小于 3MB".to_string(),
            ));
        }
        if self.adaptive_resize && !(8..=4096).contains(&self.panel_max_dimension) {
            return Err(CompileError::InvalidFormat(
                "panel_max_dimension 必须在 8~4096 之间".to_string(),
            ));
        }

        Ok(())
    }
}
