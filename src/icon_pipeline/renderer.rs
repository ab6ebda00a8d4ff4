//! # 单图标渲染
//!
//! ## 实现思路
//!
//! 1. `IconLayout::compute` 得出画布、内容区、缩放尺寸与居中偏移
//! 2. 按布局缩放源图（快速档 / 高质量档）
//! 3. 透明画布上直接覆盖写入（不做混合，画布初始为空）
//! 4. PNG 编码到内存，编码失败记为 `Render`
//! 5. 写入输出目录，同名覆盖，写盘失败记为 `Write`

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage, imageops};

use super::catalog::VariantSpec;
use super::layout::IconLayout;
use super::resize::resize_rgba;
use super::source::RenderedIcon;
use super::{IconError, SourceImage};

/// 图标渲染器。
///
/// 只持有输出目录与缩放策略，可在多个渲染线程间共享。
pub struct IconRenderer<'a> {
    output_dir: &'a Path,
    prefer_fast_resize: bool,
}

impl<'a> IconRenderer<'a> {
    pub fn new(output_dir: &'a Path, prefer_fast_resize: bool) -> Self {
        Self {
            output_dir,
            prefer_fast_resize,
        }
    }

    /// 渲染并写入一个图标，返回写入路径。
    pub fn render(&self, source: &SourceImage, spec: &VariantSpec) -> Result<PathBuf, IconError> {
        let icon = self.render_canvas(source, spec)?;
        let bytes = encode_png(&icon)?;

        let path = self.output_dir.join(&icon.file_name);
        fs::write(&path, &bytes).map_err(|e| IconError::Write {
            variant: icon.file_name.clone(),
            reason: format!("写入 '{}' 失败：{}", path.display(), e),
        })?;

        log::debug!(
            "🖼️ 已生成 {} - {}x{} quality={} ({} bytes)",
            icon.file_name,
            icon.canvas.width(),
            icon.canvas.height(),
            icon.quality.as_str(),
            bytes.len()
        );

        Ok(path)
    }

    /// 只在内存中合成画布，不落盘。
    pub(crate) fn render_canvas(
        &self,
        source: &SourceImage,
        spec: &VariantSpec,
    ) -> Result<RenderedIcon, IconError> {
        let file_name = spec.file_name();
        let layout = IconLayout::compute(spec, source.width(), source.height())?;

        let resized = resize_rgba(
            source.pixels(),
            layout.resized_width,
            layout.resized_height,
            layout.quality,
            self.prefer_fast_resize,
            &file_name,
        )?;

        let mut canvas = RgbaImage::new(layout.canvas_width, layout.canvas_height);
        imageops::replace(
            &mut canvas,
            &resized,
            i64::from(layout.draw_x),
            i64::from(layout.draw_y),
        );

        Ok(RenderedIcon {
            file_name,
            canvas,
            quality: layout.quality,
        })
    }
}

fn encode_png(icon: &RenderedIcon) -> Result<Vec<u8>, IconError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            icon.canvas.as_raw(),
            icon.canvas.width(),
            icon.canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| IconError::Render {
            variant: icon.file_name.clone(),
            reason: format!("PNG 编码失败：{}", e),
        })?;

    Ok(bytes)
}
