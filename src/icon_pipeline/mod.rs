//! # 应用图标生成模块（icon_pipeline）
//!
//! ## 设计思路
//!
//! 把“单个源 Logo → 整套打包应用图标”拆成职责单一的子模块：
//!
//! - `catalog`：固定的图标规格表（名称、基础尺寸、留白比例、缩放档位）
//! - `layout`：纯几何计算，画布 / 内容区 / 缩放尺寸 / 居中偏移 / 缩放档位
//! - `loader`：源图读取、签名与资源限制校验、可选裁边
//! - `resize`：`fast_image_resize` 优先、`image` 兜底的缩放
//! - `renderer`：单图标合成、PNG 编码与写盘
//! - `defaults`：无 Logo 时拷贝默认图标目录
//! - `handler`：编排整次生成 + 阶段耗时日志
//! - `runner`：后台线程执行 + 单一完成信号
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! spawn_pipeline(config)
//!    ↓
//! runner.rs（后台线程，oneshot 完成信号）
//!    ↓
//! handler.rs（分支选择 + 阶段耗时日志）
//!    ├─ 有 Logo：loader.rs → rayon 并发 → renderer.rs（layout + resize + PNG）
//!    └─ 无 Logo：defaults.rs（整棵目录拷贝）
//!    ↓
//! PipelineHandle::wait / wait_blocking → PipelineReport | IconError
//! ```
//!
//! ## 分层职责建议
//!
//! - 新增或调整图标规格只改 `catalog.rs`
//! - 尺寸与留白算法变更改 `layout.rs`
//! - 缩放质量策略变更改 `config.rs` 中的 `ResizeQuality`

pub mod catalog;
mod config;
mod defaults;
mod error;
mod handler;
pub mod layout;
mod loader;
mod renderer;
mod resize;
mod runner;
mod source;

pub use catalog::{VariantSpec, catalog, expected_file_names};
pub use config::{HIGH_QUALITY_MIN_EDGE, PipelineConfig, ResizeQuality};
pub use defaults::copy_default_icons;
pub use error::IconError;
pub use handler::IconPipeline;
pub use layout::IconLayout;
pub use loader::{load_source, trim_uniform_border};
pub use renderer::IconRenderer;
pub use runner::{PipelineHandle, spawn_pipeline};
pub use source::{PipelineMode, PipelineReport, SourceImage};
