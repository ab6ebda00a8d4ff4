//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `PipelineConfig`，保证运行时行为可观测、可调整、可测试。
//! 本模块提供从 JSON 文件读取的入口与基本的范围校验；
//! 路径是否真实存在留给加载/拷贝阶段判断。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用的默认值。
//! - `#[serde(default)]` 允许配置文件只写需要覆盖的字段。
//! - `ResizeQuality` 负责“内容区尺寸 → 插值滤镜”的映射（小图走快速均值，大图走三次插值）。

use std::fs;
use std::path::{Path, PathBuf};

use fast_image_resize as fr;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use super::IconError;

/// 内容区任一边小于该值时使用快速滤镜。
pub const HIGH_QUALITY_MIN_EDGE: u32 = 200;

/// 图标生成配置。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// 源 Logo 路径；为空时走默认图标拷贝分支。
    pub logo_path: Option<PathBuf>,
    /// 是否在缩放前裁掉纯色边框（失败时静默保留原图）。
    pub trim_logo: bool,
    /// 图标输出目录。
    pub output_dir: PathBuf,
    /// 未配置 Logo 时拷贝的默认图标目录。
    pub default_icons_dir: PathBuf,
    /// 渲染线程数，`None` 表示交给 rayon 按 CPU 核数决定。
    pub render_threads: Option<usize>,
    /// 源文件允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 是否优先使用 `fast_image_resize`，失败时回退 `image::imageops`。
    pub fast_resize: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            logo_path: None,
            trim_logo: false,
            output_dir: PathBuf::from("build/icons"),
            default_icons_dir: PathBuf::from("assets/icons"),
            render_threads: None,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            fast_resize: true,
        }
    }
}

impl PipelineConfig {
    /// 从 JSON 文件读取配置，缺省字段使用默认值。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use appx_icons::icon_pipeline::PipelineConfig;
    ///
    /// let config = PipelineConfig::from_json_file("icons.json".as_ref())?;
    /// # Ok::<(), appx_icons::icon_pipeline::IconError>(())
    /// ```
    pub fn from_json_file(path: &Path) -> Result<Self, IconError> {
        let content = fs::read_to_string(path).map_err(|e| {
            IconError::InvalidConfig(format!("无法读取配置文件 '{}'：{}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| IconError::InvalidConfig(format!("解析配置文件失败：{}", e)))?;
        config.validate()?;

        Ok(config)
    }

    /// 范围校验，只拦截会让生成流程必然失败的取值。
    pub fn validate(&self) -> Result<(), IconError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(IconError::InvalidConfig("output_dir 不能为空".to_string()));
        }
        if let Some(logo) = &self.logo_path {
            if logo.as_os_str().is_empty() {
                return Err(IconError::InvalidConfig("logo_path 不能为空字符串".to_string()));
            }
        } else if self.default_icons_dir.as_os_str().is_empty() {
            return Err(IconError::InvalidConfig(
                "未配置 logo_path 时 default_icons_dir 不能为空".to_string(),
            ));
        }
        if let Some(threads) = self.render_threads {
            if !(1..=64).contains(&threads) {
                return Err(IconError::InvalidConfig("render_threads 必须在 1~64 之间".to_string()));
            }
        }
        if self.max_file_size < 1024 {
            return Err(IconError::InvalidConfig("max_file_size 不能小于 1KB".to_string()));
        }
        if self.max_decoded_pixels < 1 {
            return Err(IconError::InvalidConfig("max_decoded_pixels 必须大于 0".to_string()));
        }

        Ok(())
    }
}

/// 缩放插值档位。
///
/// - `Fast`：盒式均值，小图标足够且便宜
/// - `HighQuality`：Catmull-Rom 三次插值，用于大尺寸图标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeQuality {
    Fast,
    HighQuality,
}

impl ResizeQuality {
    /// 按内容区尺寸选择档位：任一边 < 200 即走快速档。
    pub fn for_content(width: u32, height: u32) -> Self {
        if width < HIGH_QUALITY_MIN_EDGE || height < HIGH_QUALITY_MIN_EDGE {
            Self::Fast
        } else {
            Self::HighQuality
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::HighQuality => "high_quality",
        }
    }

    pub(crate) fn to_fast_filter(self) -> fr::FilterType {
        match self {
            Self::Fast => fr::FilterType::Box,
            Self::HighQuality => fr::FilterType::CatmullRom,
        }
    }

    /// 回退路径使用的 `image` 滤镜（`image` 没有盒式滤镜，用三角滤镜近似）。
    pub(crate) fn to_image_filter(self) -> FilterType {
        match self {
            Self::Fast => FilterType::Triangle,
            Self::HighQuality => FilterType::CatmullRom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_boundary_at_200() {
        assert_eq!(ResizeQuality::for_content(199, 500), ResizeQuality::Fast);
        assert_eq!(ResizeQuality::for_content(500, 199), ResizeQuality::Fast);
        assert_eq!(ResizeQuality::for_content(199, 199), ResizeQuality::Fast);
        assert_eq!(ResizeQuality::for_content(200, 200), ResizeQuality::HighQuality);
        assert_eq!(ResizeQuality::for_content(200, 1240), ResizeQuality::HighQuality);
    }

    #[test]
    fn default_config_is_valid() {
        PipelineConfig::default()
            .validate()
            .expect("default config should validate");
    }

    #[test]
    fn validate_rejects_out_of_range_threads() {
        let mut config = PipelineConfig::default();
        config.render_threads = Some(0);
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));

        config.render_threads = Some(65);
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));

        config.render_threads = Some(8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_logo_path() {
        let mut config = PipelineConfig::default();
        config.logo_path = Some(PathBuf::new());
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{ "logo_path": "logo.png", "trim_logo": true }"#)
                .expect("partial config should parse");

        assert_eq!(config.logo_path, Some(PathBuf::from("logo.png")));
        assert!(config.trim_logo);
        assert_eq!(config.output_dir, PathBuf::from("build/icons"));
        assert!(config.fast_resize);
        assert_eq!(config.render_threads, None);
    }
}
