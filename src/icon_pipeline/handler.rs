//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconPipeline` 只负责流程编排与配置管理，不关心调用方在哪个线程。
//! 处理链路固定为：
//! 1. 配置了 Logo：建输出目录 → 加载一次源图 → 并发渲染全部图标
//! 2. 未配置 Logo：拷贝默认图标目录
//!
//! ## 实现思路
//!
//! - 渲染使用独立的 rayon 线程池，线程数来自配置。
//! - 各图标只读共享同一份 `SourceImage`，输出文件互不相同，无需加锁。
//! - 任一图标失败即停止调度剩余图标，已在执行的图标会跑完，返回首个错误。
//! - 记录 `load/render/total` 阶段耗时，便于性能诊断。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use super::catalog::catalog;
use super::defaults::copy_default_icons;
use super::loader::load_source;
use super::renderer::IconRenderer;
use super::{IconError, PipelineConfig, PipelineMode, PipelineReport, SourceImage};

/// 图标生成器。
pub struct IconPipeline {
    pub(super) config: PipelineConfig,
}

impl IconPipeline {
    /// 校验配置后创建生成器。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use appx_icons::icon_pipeline::{IconPipeline, PipelineConfig};
    ///
    /// let mut config = PipelineConfig::default();
    /// config.logo_path = Some("assets/logo.png".into());
    /// let report = IconPipeline::new(config)?.run()?;
    /// println!("generated {} icons", report.files.len());
    /// # Ok::<(), appx_icons::icon_pipeline::IconError>(())
    /// ```
    pub fn new(config: PipelineConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// 在当前线程同步执行一次完整生成。
    ///
    /// 调用方若不希望被阻塞，应使用 [`IconPipeline::spawn`]。
    pub fn run(&self) -> Result<PipelineReport, IconError> {
        let total_start = Instant::now();

        let (mode, files) = match &self.config.logo_path {
            Some(logo) => (PipelineMode::Generated, self.generate_from_logo(logo)?),
            None => {
                log::info!("ℹ️ 未配置 Logo，使用默认图标");
                let files =
                    copy_default_icons(&self.config.default_icons_dir, &self.config.output_dir)?;
                (PipelineMode::CopiedDefaults, files)
            }
        };

        let elapsed_ms = total_start.elapsed().as_millis() as u64;
        log::info!(
            "✅ 图标生成完成 - mode={:?} files={} total={}ms",
            mode,
            files.len(),
            elapsed_ms
        );

        Ok(PipelineReport {
            mode,
            output_dir: self.config.output_dir.clone(),
            files,
            elapsed_ms,
        })
    }

    fn generate_from_logo(&self, logo: &Path) -> Result<Vec<PathBuf>, IconError> {
        fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            IconError::FileSystem(format!(
                "创建输出目录 '{}' 失败：{}",
                self.config.output_dir.display(),
                e
            ))
        })?;

        let load_start = Instant::now();
        let source = load_source(logo, &self.config)?;
        let load_elapsed = load_start.elapsed();

        let render_start = Instant::now();
        let files = self.render_all(&source)?;
        let render_elapsed = render_start.elapsed();

        log::info!(
            "🎨 已渲染 {} 个图标 - load={}ms render={}ms threads={}",
            files.len(),
            load_elapsed.as_millis(),
            render_elapsed.as_millis(),
            self.config
                .render_threads
                .map_or_else(|| "auto".to_string(), |n| n.to_string())
        );

        Ok(files)
    }

    fn render_all(&self, source: &SourceImage) -> Result<Vec<PathBuf>, IconError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.render_threads.unwrap_or(0))
            .thread_name(|index| format!("icon-render-{index}"))
            .build()
            .map_err(|e| IconError::Worker(format!("创建渲染线程池失败：{}", e)))?;

        let renderer = IconRenderer::new(&self.config.output_dir, self.config.fast_resize);

        pool.install(|| {
            catalog()
                .par_iter()
                .map(|spec| renderer.render(source, spec))
                .collect::<Result<Vec<_>, IconError>>()
        })
    }
}
