//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → RGB8”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码，降低恶意输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限快速拒绝
//! 3. 完整解码
//! 4. 根据配置决定是否降采样到面板分辨率
//! 5. 转换 RGB8（丢弃 alpha），并校验字节长度一致性

use fast_image_resize as fr;
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;

use super::source::{DecodedImage, RawImageData};
use super::{CompileError, Compiler, CompilerConfig};

impl Compiler {
    /// 将原始字节解码为可供扫描的 RGB8 栅格。
    pub(super) fn decode_and_prepare(
        &self,
        raw: RawImageData,
        config: &CompilerConfig,
    ) -> Result<DecodedImage, CompileError> {
        let _format: ImageFormat = image::guess_format(&raw.bytes)
            .map_err(|e| CompileError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        self.validate_pixel_limits(config, header_width, header_height)?;
        self.validate_decoded_memory_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| CompileError::Decode(format!("图片解码失败：{}", e)))?;

        let (raw_width, raw_height) = decoded.dimensions();
        self.validate_pixel_limits(config, raw_width, raw_height)?;
        self.validate_decoded_memory_limits(config, raw_width, raw_height)?;

        let optimized = self.maybe_downscale_for_panel(decoded, config)?;
        let (width, height) = optimized.dimensions();

        let rgb = optimized.to_rgb8();

        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or_else(|| CompileError::ResourceLimit("图片尺寸导致内存溢出风险".to_string()))?;

        if rgb.as_raw().len() != expected_len {
            return Err(CompileError::Decode("解码后像素数据长度异常".to_string()));
        }

        log::info!(
            "✅ 图片解码成功 - 来源: {} 原始尺寸: {}x{} 输出尺寸: {}x{}",
            raw.source_hint,
            raw_width,
            raw_height,
            width,
            height
        );

        Ok(DecodedImage { width, height, rgb })
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), CompileError> {
        let cursor = Cursor::new(bytes);
        let reader = image::ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| CompileError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| CompileError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        &self,
        config: &CompilerConfig,
        width: u32,
        height: u32,
    ) -> Result<(), CompileError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| CompileError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(CompileError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn validate_decoded_memory_limits(
        &self,
        config: &CompilerConfig,
        width: u32,
        height: u32,
    ) -> Result<(), CompileError> {
        let estimated = (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or_else(|| CompileError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > config.max_decoded_bytes {
            return Err(CompileError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }

    /// 按配置降采样到面板分辨率。
    ///
    /// 面板每个像素对应一条脚本调用，降采样同时控制脚本体积与执行耗时。
    fn maybe_downscale_for_panel(
        &self,
        image: DynamicImage,
        config: &CompilerConfig,
    ) -> Result<DynamicImage, CompileError> {
        if !config.adaptive_resize {
            return Ok(image);
        }

        let (width, height) = image.dimensions();
        if width <= config.panel_max_dimension && height <= config.panel_max_dimension {
            return Ok(image);
        }

        let scale = (config.panel_max_dimension as f64 / width as f64)
            .min(config.panel_max_dimension as f64 / height as f64)
            .min(1.0);

        if scale <= 0.0 {
            return Err(CompileError::ResourceLimit("缩放比例计算异常".to_string()));
        }

        let target_width = ((width as f64 * scale).floor() as u32).max(1);
        let target_height = ((height as f64 * scale).floor() as u32).max(1);

        log::info!(
            "🧩 面板降采样：{}x{} -> {}x{}（filter={:?}）",
            width,
            height,
            target_width,
            target_height,
            config.resize_filter
        );

        match Self::resize_with_fast_image_resize(
            &image,
            target_width,
            target_height,
            config.resize_filter,
        ) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 降采样失败，回退 image::resize_exact：{}",
                    err
                );
                Ok(image.resize_exact(target_width, target_height, config.resize_filter))
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        target_width: u32,
        target_height: u32,
        filter: image::imageops::FilterType,
    ) -> Result<DynamicImage, CompileError> {
        let src = image.to_rgb8();
        let (src_width, src_height) = src.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            src.into_raw(),
            fr::PixelType::U8x3,
        )
        .map_err(|e| CompileError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image =
            fr::images::Image::new(target_width, target_height, fr::PixelType::U8x3);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| CompileError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        let rgb = ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(
            target_width,
            target_height,
            dst_image.into_vec(),
        )
        .ok_or_else(|| CompileError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))?;

        Ok(DynamicImage::ImageRgb8(rgb))
    }

    fn to_fast_filter(filter: image::imageops::FilterType) -> fr::FilterType {
        match filter {
            image::imageops::FilterType::Nearest => fr::FilterType::Box,
            image::imageops::FilterType::Triangle => fr::FilterType::Bilinear,
            image::imageops::FilterType::CatmullRom => fr::FilterType::CatmullRom,
            image::imageops::FilterType::Gaussian => fr::FilterType::Mitchell,
            image::imageops::FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}
