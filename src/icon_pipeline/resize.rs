//! # 缩放模块
//!
//! ## 设计思路
//!
//! 优先使用 `fast_image_resize`（SIMD 卷积，带预乘 alpha），失败时回退
//! `image::imageops::resize`，保证单个图标不会因为快速路径异常而整体失败。
//!
//! ## 实现思路
//!
//! 1. 以 `ImageRef` 借用 RGBA 源缓冲交给 `fast_image_resize`，不复制、不转换
//! 2. 滤镜由 `ResizeQuality` 决定（快速档盒式均值 / 高质量档 Catmull-Rom）
//! 3. 输出缓冲长度校验后还原为 `RgbaImage`

use fast_image_resize as fr;
use image::{ImageBuffer, RgbaImage, imageops};

use super::{IconError, ResizeQuality};

/// 将 RGBA 源图缩放到精确尺寸。
///
/// `variant` 仅用于错误上下文。
pub(crate) fn resize_rgba(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    quality: ResizeQuality,
    prefer_fast: bool,
    variant: &str,
) -> Result<RgbaImage, IconError> {
    if source.width() == target_width && source.height() == target_height {
        return Ok(source.clone());
    }

    if prefer_fast {
        match resize_with_fast_image_resize(source, target_width, target_height, quality, variant) {
            Ok(resized) => return Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                    err
                );
            }
        }
    }

    Ok(imageops::resize(
        source,
        target_width,
        target_height,
        quality.to_image_filter(),
    ))
}

fn resize_with_fast_image_resize(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    quality: ResizeQuality,
    variant: &str,
) -> Result<RgbaImage, IconError> {
    let render_err = |reason: String| IconError::Render {
        variant: variant.to_string(),
        reason,
    };

    // 借用共享源图缓冲，每个图标不再各自复制一份
    let src_image = fr::images::ImageRef::new(
        source.width(),
        source.height(),
        source.as_raw(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| render_err(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(quality.to_fast_filter()));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| render_err(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| render_err("fast_image_resize 输出缓冲长度异常".to_string()))
}
