//! # 图片编译模块（compiler）
//!
//! ## 设计思路
//!
//! 该模块将“读取校验 → 解码降采样 → 扫描生成”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：负责文件读取与签名安全校验
//! - `pipeline`：负责解码、像素限制、降采样
//! - `codegen`：负责背景过滤与脚本渲染
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型，内部细节保持 `mod` 私有。
//! 可以按下面顺序理解调用链：
//!
//! ```text
//! main.rs（参数适配）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（文件读取 + 体积/签名校验）
//!    ├─ pipeline.rs（解码 + 像素限制 + 降采样）
//!    └─ codegen.rs（背景过滤 + 模板渲染）
//!    ↓
//! storage.rs（脚本落盘）
//! ```
//!
//! ## 分层职责建议
//!
//! - 配置与策略变更优先改 `config.rs`
//! - 业务流程顺序变更优先改 `handler.rs`
//! - 单阶段行为优化分别改 `loader/pipeline/codegen`
//! - 脚本模板变更只改 `codegen.rs`，并同步其文档中的模板示例

mod codegen;
mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;

pub use config::CompilerConfig;
pub use error::CompileError;
pub use handler::Compiler;
pub use source::GeneratedScript;
