//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入”和“流水线中间结果”解耦：
//! - `RawImageData` 表示已读取但未解码的字节
//! - `DecodedImage` 表示已解码并归一化为 RGB8 的栅格
//! - `PixelCall` 表示一条待渲染的像素调用
//! - `GeneratedScript` 表示最终脚本文本与生成统计

use image::RgbImage;

/// 读取阶段输出：原始字节与来源标识。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: &'static str,
}

/// 解码阶段输出：RGB8 栅格。
pub(crate) struct DecodedImage {
    /// 图像宽度（像素）。
    pub(crate) width: u32,
    /// 图像高度（像素）。
    pub(crate) height: u32,
    /// RGB8 像素缓冲（`width * height * 3` 字节）。
    pub(crate) rgb: RgbImage,
}

/// 扫描阶段输出：一条 `setColorRGB` 调用的五元组。
///
/// 仅在生成调用行时短暂存在，渲染完成后即丢弃。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PixelCall {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
    pub(crate) x: u32,
    pub(crate) y: u32,
}

/// 渲染阶段输出：脚本文本与统计信息。
pub struct GeneratedScript {
    /// 最终 Lua 脚本文本。
    pub text: String,
    /// 实际生成的像素调用条数。
    pub call_count: usize,
    /// 被背景色过滤掉的像素数。
    pub skipped_pixels: usize,
    /// 参与扫描的图像宽度（像素）。
    pub width: u32,
    /// 参与扫描的图像高度（像素）。
    pub height: u32,
}
