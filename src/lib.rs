//! # 打包应用图标生成器 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 调用方（构建脚本 / CLI）                  │
//! │                                                          │
//! │   PipelineConfig (JSON) ──→ spawn_pipeline(config)       │
//! │                                  │                       │
//! │          PipelineHandle::wait / wait_blocking            │
//! └──────────────────────────────────┼───────────────────────┘
//!                                    ↕ 单一完成信号
//! ┌──────────────────────────────────┼───────────────────────┐
//! │                  后端 (Rust)     ↕                       │
//! │                                                          │
//! │  ┌─ error ─────────── AppError (统一错误类型)             │
//! │  │                                                       │
//! │  └─ icon_pipeline                                        │
//! │      ├─ catalog     图标规格表（82 项）                   │
//! │      ├─ layout      画布·留白·缩放·居中                   │
//! │      ├─ loader      读取·校验·裁边                        │
//! │      ├─ renderer    合成·PNG 编码·写盘                    │
//! │      ├─ defaults    默认图标拷贝                          │
//! │      └─ runner      后台线程 + rayon 并发渲染             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，命令行入口的返回类型 |
//! | [`icon_pipeline`] | 从单个 Logo 生成整套图标，或回退为拷贝默认图标 |

pub mod error;
pub mod icon_pipeline;
