//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `Compiler` 只负责流程编排与配置管理，不直接与命令行绑定。
//! 处理链路固定为：
//! 1. 校验面板名称
//! 2. 读取配置快照
//! 3. 读取并校验原始字节
//! 4. 解码并准备 RGB8 栅格
//! 5. 扫描背景并渲染脚本文本
//!
//! ## 实现思路
//!
//! - 配置通过 `Arc<RwLock<CompilerConfig>>` 支持运行期调整。
//! - 单次请求内使用“同一配置快照”，避免处理中途配置漂移。
//! - 记录 `load/decode/render/total` 阶段耗时，便于性能诊断。

use std::path::Path;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use super::{CompileError, CompilerConfig, GeneratedScript};
use crate::panel::{self, PanelTarget};

/// 图片编译器。
///
/// 封装配置状态，并编排各子模块实现完整流程。
pub struct Compiler {
    pub(super) config: Arc<RwLock<CompilerConfig>>,
}

impl Compiler {
    /// 根据初始配置创建编译器。配置在此处一次性校验。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use panel_painter::compiler::{Compiler, CompilerConfig};
    ///
    /// let compiler = Compiler::new(CompilerConfig::default())?;
    /// # Ok::<(), panel_painter::compiler::CompileError>(())
    /// ```
    pub fn new(config: CompilerConfig) -> Result<Self, CompileError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(RwLock::new(config)),
        })
    }

    /// 获取配置快照。
    ///
    /// 作用：保证单次请求链路使用一致参数。
    pub(super) fn config_snapshot(&self) -> Result<CompilerConfig, CompileError> {
        self.config
            .read()
            .map(|cfg| cfg.clone())
            .map_err(|_| CompileError::ResourceLimit("配置读取锁已中毒".to_string()))
    }

    /// 替换背景哨兵色。
    pub fn set_background(&self, background: image::Rgb<u8>) -> Result<(), CompileError> {
        let mut config = self
            .config
            .write()
            .map_err(|_| CompileError::ResourceLimit("配置写入锁已中毒".to_string()))?;
        config.background = background;
        Ok(())
    }

    /// 编译主入口：从图片文件生成面板点亮脚本。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use std::path::Path;
    /// use panel_painter::compiler::{Compiler, CompilerConfig};
    /// use panel_painter::panel::PanelTarget;
    ///
    /// let compiler = Compiler::new(CompilerConfig::default())?;
    /// let target = PanelTarget::parse("front", "white")?;
    /// let script = compiler.compile(Path::new("logo.png"), "logo", &target)?;
    /// println!("{}", script.text);
    /// # Ok::<(), panel_painter::error::AppError>(())
    /// ```
    pub fn compile(
        &self,
        path: &Path,
        name: &str,
        target: &PanelTarget,
    ) -> Result<GeneratedScript, CompileError> {
        panel::validate_panel_name(name)?;

        let config = self.config_snapshot()?;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_from_file(path, &config)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let decoded = self.decode_and_prepare(raw, &config)?;
        let decode_elapsed = decode_start.elapsed();

        let render_start = Instant::now();
        let script = Self::render_script(&decoded, name, target, config.background);
        let render_elapsed = render_start.elapsed();

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ 脚本生成完成 - load={}ms decode={}ms render={}ms total={}ms calls={} skipped={}",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            render_elapsed.as_millis(),
            total_elapsed.as_millis(),
            script.call_count,
            script.skipped_pixels
        );

        Ok(script)
    }
}
