//! # panel-painter — 命令行入口
//!
//! 本文件仅负责参数解析、日志初始化与流程调用。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use panel_painter::compiler::{Compiler, CompilerConfig};
use panel_painter::error::AppError;
use panel_painter::panel::PanelTarget;
use panel_painter::storage;

/// 将位图图片编译为面板外设的 Lua 点亮脚本。
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// 输入图片文件（PNG / JPEG）
    #[arg(short, long)]
    input: PathBuf,

    /// 输出 Lua 脚本文件
    #[arg(short, long)]
    output: PathBuf,

    /// 面板名称（脚本中的 Lua 全局变量前缀）
    #[arg(short, long)]
    name: String,

    /// 面板所在面（top / bottom / left / right / front / back）
    #[arg(short, long)]
    side: String,

    /// 面板颜色通道（white / orange / ... / black）
    #[arg(short, long)]
    color: String,

    /// 背景哨兵色，格式 r,g,b；等于该颜色的像素不生成调用
    #[arg(long, default_value = "0,0,0")]
    background: String,

    /// 降采样后宽/高单边最大值；0 表示不降采样
    #[arg(long, default_value_t = 0)]
    max_dimension: u32,

    /// 以 JSON 形式在标准输出打印转换报告
    #[arg(long)]
    json: bool,
}

/// 转换报告：供脚本化调用方消费的结构化结果。
#[derive(Debug, Serialize)]
struct ConversionReport {
    input: String,
    output: String,
    width: u32,
    height: u32,
    emitted_calls: usize,
    skipped_pixels: usize,
    bytes_written: u64,
}

fn run(args: &Args) -> Result<(), AppError> {
    let target = PanelTarget::parse(&args.side, &args.color)?;
    let background = CompilerConfig::parse_background(&args.background)?;

    let mut config = CompilerConfig {
        background,
        ..CompilerConfig::default()
    };
    if args.max_dimension > 0 {
        config.adaptive_resize = true;
        config.panel_max_dimension = args.max_dimension;
    }

    let compiler = Compiler::new(config)?;
    let script = compiler.compile(&args.input, &args.name, &target)?;
    let output = storage::write_script(&args.output, &script.text)?;

    if args.json {
        let report = ConversionReport {
            input: args.input.to_string_lossy().to_string(),
            output: output.path,
            width: script.width,
            height: script.height,
            emitted_calls: script.call_count,
            skipped_pixels: script.skipped_pixels,
            bytes_written: output.bytes_written,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::Output(format!("序列化转换报告失败: {}", e)))?;
        println!("{}", rendered);
    } else {
        log::info!(
            "💾 脚本已保存 - 路径: {} 体积: {} 字节 调用: {} 条",
            output.path,
            output.bytes_written,
            script.call_count
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("❌ 转换失败: {err}");
            ExitCode::FAILURE
        }
    }
}
