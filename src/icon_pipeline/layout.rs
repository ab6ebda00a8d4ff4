//! # 几何布局
//!
//! 单个图标的纯几何计算，不触碰像素：
//!
//! 1. `scaled = base * scale`（浮点）
//! 2. 内容区 `content = ceil(scaled - scaled * padding)`
//! 3. 按内容区尺寸选择插值档位
//! 4. 等比缩放适配内容区：内容区宽 > 高时按高度缩放，否则按宽度缩放；
//!    另一边若超出内容区，则改按另一边适配
//! 5. 画布 `ceil(scaled)`，内容居中，偏移量整数除法并下限为 0

use super::catalog::VariantSpec;
use super::{IconError, ResizeQuality};

/// 单个图标的布局结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub content_width: u32,
    pub content_height: u32,
    pub resized_width: u32,
    pub resized_height: u32,
    pub draw_x: u32,
    pub draw_y: u32,
    pub quality: ResizeQuality,
}

impl IconLayout {
    pub fn compute(
        spec: &VariantSpec,
        source_width: u32,
        source_height: u32,
    ) -> Result<Self, IconError> {
        if source_width == 0 || source_height == 0 {
            return Err(IconError::Render {
                variant: spec.file_name(),
                reason: format!("源图尺寸无效：{}x{}", source_width, source_height),
            });
        }

        let scaled_width = spec.base_width as f64 * spec.scale;
        let scaled_height = spec.base_height as f64 * spec.scale;

        let canvas_width = scaled_width.ceil() as u32;
        let canvas_height = scaled_height.ceil() as u32;
        if canvas_width == 0 || canvas_height == 0 {
            return Err(IconError::Render {
                variant: spec.file_name(),
                reason: format!("画布尺寸无效：{}x{}", canvas_width, canvas_height),
            });
        }

        let content_width =
            ((scaled_width - scaled_width * spec.padding_width_pct).ceil() as u32).max(1);
        let content_height =
            ((scaled_height - scaled_height * spec.padding_height_pct).ceil() as u32).max(1);

        let quality = ResizeQuality::for_content(content_width, content_height);
        let (resized_width, resized_height) =
            fit_within(source_width, source_height, content_width, content_height);

        let draw_x = (canvas_width / 2).saturating_sub(resized_width / 2);
        let draw_y = (canvas_height / 2).saturating_sub(resized_height / 2);

        Ok(Self {
            canvas_width,
            canvas_height,
            content_width,
            content_height,
            resized_width,
            resized_height,
            draw_x,
            draw_y,
            quality,
        })
    }
}

/// 等比缩放到内容区以内，优先撑满内容区较短的一边。
fn fit_within(source_width: u32, source_height: u32, bound_width: u32, bound_height: u32) -> (u32, u32) {
    let sw = source_width as f64;
    let sh = source_height as f64;

    let by_height = |height: u32| {
        let width = (sw * height as f64 / sh).round() as u32;
        (width.max(1), height)
    };
    let by_width = |width: u32| {
        let height = (sh * width as f64 / sw).round() as u32;
        (width, height.max(1))
    };

    if bound_width > bound_height {
        let (width, height) = by_height(bound_height);
        if width <= bound_width {
            return (width, height);
        }
        let (width, height) = by_width(bound_width);
        (width, height.min(bound_height))
    } else {
        let (width, height) = by_width(bound_width);
        if height <= bound_height {
            return (width, height);
        }
        let (width, height) = by_height(bound_height);
        (width.min(bound_width), height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_pipeline::catalog::{catalog, find};
    use proptest::prelude::*;

    #[test]
    fn square_source_fills_square_content() {
        let spec = find("StoreLogo", 1.0).expect("StoreLogo");
        let layout = IconLayout::compute(spec, 512, 512).expect("layout");

        // 50 - 50 * 0.34 = 33
        assert_eq!((layout.canvas_width, layout.canvas_height), (50, 50));
        assert_eq!((layout.content_width, layout.content_height), (33, 33));
        assert_eq!((layout.resized_width, layout.resized_height), (33, 33));
        assert_eq!((layout.draw_x, layout.draw_y), (9, 9));
        assert_eq!(layout.quality, ResizeQuality::Fast);
    }

    #[test]
    fn wide_content_resizes_by_height() {
        let spec = find("SplashScreen", 1.0).expect("SplashScreen");
        let layout = IconLayout::compute(spec, 512, 512).expect("layout");

        assert_eq!((layout.canvas_width, layout.canvas_height), (620, 300));
        assert_eq!((layout.content_width, layout.content_height), (410, 198));
        assert_eq!((layout.resized_width, layout.resized_height), (198, 198));
        assert_eq!(layout.draw_x, 310 - 99);
        assert_eq!(layout.draw_y, 150 - 99);
        assert_eq!(layout.quality, ResizeQuality::Fast);
    }

    #[test]
    fn fractional_scale_rounds_canvas_up() {
        let spec = find("SmallTile", 1.25).expect("SmallTile 125");
        let layout = IconLayout::compute(spec, 64, 64).expect("layout");

        // 71 * 1.25 = 88.75
        assert_eq!((layout.canvas_width, layout.canvas_height), (89, 89));
    }

    #[test]
    fn large_variants_pick_high_quality_filter() {
        let spec = find("LargeTile", 2.0).expect("LargeTile 200");
        let layout = IconLayout::compute(spec, 512, 512).expect("layout");
        assert_eq!(layout.quality, ResizeQuality::HighQuality);

        let spec = find("Square44x44Logo.targetsize-256", 1.0).expect("targetsize 256");
        let layout = IconLayout::compute(spec, 512, 512).expect("layout");
        assert_eq!(layout.quality, ResizeQuality::HighQuality);
    }

    #[test]
    fn very_wide_source_is_refit_by_width() {
        let spec = find("SplashScreen", 1.0).expect("SplashScreen");
        let layout = IconLayout::compute(spec, 4000, 100).expect("layout");

        assert_eq!(layout.resized_width, layout.content_width);
        assert!(layout.resized_height <= layout.content_height);
        assert!(layout.resized_height >= 1);
    }

    #[test]
    fn zero_sized_source_is_rejected() {
        let spec = find("BadgeLogo", 1.0).expect("BadgeLogo");
        let result = IconLayout::compute(spec, 0, 10);
        assert!(matches!(result, Err(IconError::Render { .. })));
    }

    #[test]
    fn catalog_canvas_matches_ceil_of_scaled_size() {
        for spec in catalog() {
            let layout = IconLayout::compute(spec, 512, 512).expect("layout");
            assert_eq!(
                layout.canvas_width,
                (spec.base_width as f64 * spec.scale).ceil() as u32,
                "{}",
                spec.file_name()
            );
            assert_eq!(
                layout.canvas_height,
                (spec.base_height as f64 * spec.scale).ceil() as u32,
                "{}",
                spec.file_name()
            );
        }
    }

    proptest! {
        #[test]
        fn resized_content_stays_within_bounds_and_centered(
            index in 0usize..82,
            source_width in 1u32..4096,
            source_height in 1u32..4096
        ) {
            let spec = &catalog()[index];
            let layout = IconLayout::compute(spec, source_width, source_height).unwrap();

            prop_assert!(layout.resized_width >= 1 && layout.resized_height >= 1);
            prop_assert!(layout.resized_width <= layout.content_width);
            prop_assert!(layout.resized_height <= layout.content_height);
            prop_assert!(layout.content_width <= layout.canvas_width);
            prop_assert!(layout.content_height <= layout.canvas_height);

            prop_assert_eq!(layout.draw_x + layout.resized_width / 2, layout.canvas_width / 2);
            prop_assert_eq!(layout.draw_y + layout.resized_height / 2, layout.canvas_height / 2);
            prop_assert!(layout.draw_x + layout.resized_width <= layout.canvas_width + 1);
            prop_assert!(layout.draw_y + layout.resized_height <= layout.canvas_height + 1);
        }

        #[test]
        fn quality_tracks_content_edge(
            index in 0usize..82
        ) {
            let spec = &catalog()[index];
            let layout = IconLayout::compute(spec, 512, 512).unwrap();
            let small = layout.content_width < 200 || layout.content_height < 200;
            prop_assert_eq!(layout.quality == ResizeQuality::Fast, small);
        }
    }
}
