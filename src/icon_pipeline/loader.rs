//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 源 Logo 在整次生成中只加载一次，并在“尽可能早”的阶段执行输入校验，
//! 尽快失败，避免在坏输入上浪费解码与渲染开销。
//!
//! ## 实现思路
//!
//! - 存在性 + metadata 体积限制 + 读取
//! - 文件签名识别（`infer`），非图片直接判为解码错误
//! - 读取 header 尺寸做像素上限检查，再完整解码
//! - 可选裁边：失败时保留原图，只记 debug 日志，不中断流程

use std::io::Cursor;
use std::path::Path;

use image::{GenericImageView, ImageReader, Rgba, RgbaImage, imageops};

use super::{IconError, PipelineConfig, SourceImage};

/// 加载源 Logo，按配置决定是否裁边。
pub fn load_source(path: &Path, config: &PipelineConfig) -> Result<SourceImage, IconError> {
    log::info!("📁 开始读取源 Logo - 路径: {}", path.display());

    let bytes = read_source_bytes(path, config.max_file_size)?;
    validate_image_signature(&bytes)?;

    let (header_width, header_height) = inspect_dimensions_from_memory(&bytes)?;
    validate_pixel_limits(config.max_decoded_pixels, header_width, header_height)?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| IconError::SourceDecode(format!("图片解码失败：{}", e)))?;
    let (width, height) = decoded.dimensions();
    validate_pixel_limits(config.max_decoded_pixels, width, height)?;

    let rgba = decoded.to_rgba8();

    let source = if config.trim_logo {
        match trim_uniform_border(&rgba) {
            Ok(trimmed) => {
                log::info!(
                    "✂️ 已裁边：{}x{} -> {}x{}",
                    width,
                    height,
                    trimmed.width(),
                    trimmed.height()
                );
                SourceImage::with_trim_applied(trimmed)
            }
            Err(err) => {
                log::debug!("裁边跳过，保留原图：{}", err);
                SourceImage::new(rgba)
            }
        }
    } else {
        SourceImage::new(rgba)
    };

    log::info!(
        "✅ 源 Logo 解码成功 - 原始尺寸: {}x{} 使用尺寸: {}x{}",
        width,
        height,
        source.width(),
        source.height()
    );

    Ok(source)
}

fn read_source_bytes(path: &Path, max_file_size: u64) -> Result<Vec<u8>, IconError> {
    if !path.is_file() {
        return Err(IconError::SourceNotFound(format!(
            "文件不存在：{}",
            path.display()
        )));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| IconError::SourceNotFound(format!("无法读取文件信息：{}", e)))?;

    if metadata.len() > max_file_size {
        return Err(IconError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            metadata.len() as f64 / 1024.0 / 1024.0,
            max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    std::fs::read(path)
        .map_err(|e| IconError::SourceNotFound(format!("无法读取图片文件：{}", e)))
}

fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
    if bytes.is_empty() {
        return Err(IconError::SourceDecode("图片内容为空".to_string()));
    }

    let kind = infer::get(bytes)
        .ok_or_else(|| IconError::SourceDecode("无法识别图片类型".to_string()))?;

    if kind.matcher_type() != infer::MatcherType::Image {
        return Err(IconError::SourceDecode(format!(
            "文件签名不是图片类型：{}",
            kind.mime_type()
        )));
    }

    Ok(())
}

/// 仅通过图片头信息读取宽高，用于完整解码前的像素限制检查。
fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| IconError::SourceDecode(format!("无法识别图片格式：{}", e)))?
        .into_dimensions()
        .map_err(|e| IconError::SourceDecode(format!("无法读取图片尺寸：{}", e)))
}

fn validate_pixel_limits(max_pixels: u64, width: u32, height: u32) -> Result<(), IconError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > max_pixels {
        return Err(IconError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, max_pixels
        )));
    }

    Ok(())
}

/// 裁掉与左上角像素颜色一致的边框。
///
/// 完全透明的像素一律视为同色，不比较其 RGB 分量。
/// 整张图都是同一颜色时无内容可保留，返回 `IconError::Trim`；
/// 调用方应把它当作“不裁边”处理。
pub fn trim_uniform_border(image: &RgbaImage) -> Result<RgbaImage, IconError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(IconError::Trim("图片尺寸为 0".to_string()));
    }

    let border = *image.get_pixel(0, 0);
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if same_colour(pixel, &border) {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    let (min_x, min_y, max_x, max_y) =
        bounds.ok_or_else(|| IconError::Trim("图片为纯色，无可保留内容".to_string()))?;

    let crop_width = max_x - min_x + 1;
    let crop_height = max_y - min_y + 1;
    if crop_width == width && crop_height == height {
        return Ok(image.clone());
    }

    Ok(imageops::crop_imm(image, min_x, min_y, crop_width, crop_height).to_image())
}

fn same_colour(a: &Rgba<u8>, b: &Rgba<u8>) -> bool {
    a == b || (a.0[3] == 0 && b.0[3] == 0)
}
