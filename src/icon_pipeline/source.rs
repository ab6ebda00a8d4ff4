//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“流水线输入”和“流水线中间/最终结果”解耦：
//! - `SourceImage` 表示已解码（可能已裁边）的源图，之后只读共享
//! - `RenderedIcon` 表示单个图标画布，写盘后即丢弃
//! - `PipelineReport` 表示一次生成的最终结果，随完成信号交给调用方

use std::path::PathBuf;
use std::sync::Arc;

use image::RgbaImage;
use serde::Serialize;

use super::ResizeQuality;

/// 已解码的源图。
///
/// 像素缓冲放在 `Arc` 中，克隆只增加引用计数；各图标渲染并发读取同一份数据。
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: Arc<RgbaImage>,
    trimmed: bool,
}

impl SourceImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
            trimmed: false,
        }
    }

    pub(crate) fn with_trim_applied(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
            trimmed: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// 裁边是否实际生效（裁边失败或未开启时为 `false`）。
    pub fn is_trimmed(&self) -> bool {
        self.trimmed
    }
}

/// 渲染阶段输出：待编码的画布与目标文件名。
pub(crate) struct RenderedIcon {
    pub(crate) file_name: String,
    pub(crate) canvas: RgbaImage,
    pub(crate) quality: ResizeQuality,
}

/// 本次生成走的分支。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineMode {
    /// 从 Logo 渲染完整图标集。
    Generated,
    /// 未配置 Logo，拷贝默认图标目录。
    CopiedDefaults,
}

/// 生成结果。
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub mode: PipelineMode,
    pub output_dir: PathBuf,
    /// 已写入的文件（生成分支按目录顺序排列）。
    pub files: Vec<PathBuf>,
    pub elapsed_ms: u64,
}
