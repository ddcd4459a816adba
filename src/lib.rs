//! # panel-painter — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    命令行入口 (main.rs)                   │
//! │                                                          │
//! │  clap 参数解析 ── env_logger 初始化 ── JSON 转换报告      │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ Result<T, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕              库 (Rust)                           │
//! │                                                          │
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  │                                                       │
//! │  ├─ panel ────── 面/颜色解析 + 名称校验 (regex)           │
//! │  │                                                       │
//! │  ├─ compiler ─── 读取·解码·降采样·脚本生成                │
//! │  │   ├─ loader        文件读取 + 签名校验                 │
//! │  │   ├─ pipeline      解码 + 像素限制 + 降采样            │
//! │  │   └─ codegen       背景过滤 + Lua 模板渲染             │
//! │  │                                                       │
//! │  └─ storage ──── 脚本落盘 (返回 Result)                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，命令行入口的返回类型 |
//! | [`panel`] | 面板面/颜色枚举解析、名称合法性校验 |
//! | [`compiler`] | 从图片文件生成面板点亮脚本的完整流水线 |
//! | [`storage`] | 生成脚本的落盘与目录自动创建 |

pub mod compiler;
pub mod error;
pub mod panel;
pub mod storage;
