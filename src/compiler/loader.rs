//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理输入图片的原始字节读取，并在“尽可能早”的阶段执行输入校验。
//! 目标是尽快失败，减少不必要内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! - 文件：存在性 + metadata 体积限制 + 读取。
//! - 签名：通过 magic bytes 识别文件类型，仅放行 PNG / JPEG。
//! - 所有失败统一映射到 `CompileError`，便于上层处理。

use std::path::Path;

use super::source::RawImageData;
use super::{CompileError, Compiler, CompilerConfig};

impl Compiler {
    /// 从本地路径加载图片原始字节。
    pub(super) fn load_from_file(
        &self,
        path: &Path,
        config: &CompilerConfig,
    ) -> Result<RawImageData, CompileError> {
        log::info!("📁 开始读取图片 - 路径: {}", path.display());

        if !path.exists() {
            return Err(CompileError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| CompileError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > config.max_file_size {
            return Err(CompileError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| CompileError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            source_hint: "file",
        })
    }

    /// 通过文件签名（magic bytes）校验输入是否为支持的图片类型。
    ///
    /// 扩展名不可信，以字节签名为准。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), CompileError> {
        if bytes.is_empty() {
            return Err(CompileError::InvalidFormat("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| CompileError::InvalidFormat("无法识别图片类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(CompileError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        match kind.mime_type() {
            "image/png" | "image/jpeg" => Ok(()),
            other => Err(CompileError::InvalidFormat(format!(
                "不支持的图片类型：{}（仅支持 PNG / JPEG）",
                other
            ))),
        }
    }
}
