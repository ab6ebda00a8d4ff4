//! # 图标清单
//!
//! 打包清单引用的全部图标资源，纯数据、固定顺序。文件名必须与清单中的资源
//! 引用逐字一致，改动任何一项都会导致打包阶段找不到资源。
//!
//! 组成：
//! - 小/中/宽/大磁贴、应用图标、启动画面、角标、商店图标：各 5 个 DPI 缩放
//! - 应用图标的 target size 系列（plated / unplated / light unplated）：各 14 个像素尺寸
//!
//! 替代形态后缀使用下划线连接（`targetsize-48_altform-unplated`），与 MSIX 资源
//! 限定符的文件命名一致；打包清单必须引用同样的名称。

/// 单个图标的尺寸定义。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantSpec {
    pub name: &'static str,
    pub base_width: u32,
    pub base_height: u32,
    /// 宽度方向留白比例，取值 `[0, 1)`。
    pub padding_width_pct: f64,
    /// 高度方向留白比例，取值 `[0, 1)`。
    pub padding_height_pct: f64,
    pub scale: f64,
}

impl VariantSpec {
    const fn new(
        name: &'static str,
        base_width: u32,
        base_height: u32,
        padding_pct: f64,
        scale: f64,
    ) -> Self {
        Self {
            name,
            base_width,
            base_height,
            padding_width_pct: padding_pct,
            padding_height_pct: padding_pct,
            scale,
        }
    }

    const fn target_size(name: &'static str, px: u32) -> Self {
        Self::new(name, px, px, 0.0, 1.0)
    }

    /// 名称中已带明确像素尺寸（`targetsize` 约定）。
    pub fn is_target_size(&self) -> bool {
        self.name.contains("targetsize")
    }

    /// `round(scale * 100)`，用于 `.scale-<N>` 后缀。
    pub fn scale_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// 输出文件名：target size 原样使用，其余追加 `.scale-<N>`。
    pub fn file_name(&self) -> String {
        if self.is_target_size() {
            format!("{}.png", self.name)
        } else {
            format!("{}.scale-{}.png", self.name, self.scale_percent())
        }
    }
}

/// 高 DPI 缩放档位。
pub const DPI_SCALES: [f64; 5] = [1.0, 1.25, 1.5, 2.0, 4.0];

/// 打包规范允许的 target size 像素尺寸。
pub const TARGET_SIZES: [u32; 14] = [16, 20, 24, 30, 32, 36, 40, 48, 60, 64, 72, 80, 96, 256];

const TILE_PADDING: f64 = 0.34;
const APP_ICON_PADDING: f64 = 0.16;

static CATALOG: [VariantSpec; 82] = [
    // 小磁贴
    VariantSpec::new("SmallTile", 71, 71, TILE_PADDING, 1.0),
    VariantSpec::new("SmallTile", 71, 71, TILE_PADDING, 1.25),
    VariantSpec::new("SmallTile", 71, 71, TILE_PADDING, 1.5),
    VariantSpec::new("SmallTile", 71, 71, TILE_PADDING, 2.0),
    VariantSpec::new("SmallTile", 71, 71, TILE_PADDING, 4.0),
    // 中磁贴
    VariantSpec::new("Square150x150Logo", 150, 150, TILE_PADDING, 1.0),
    VariantSpec::new("Square150x150Logo", 150, 150, TILE_PADDING, 1.25),
    VariantSpec::new("Square150x150Logo", 150, 150, TILE_PADDING, 1.5),
    VariantSpec::new("Square150x150Logo", 150, 150, TILE_PADDING, 2.0),
    VariantSpec::new("Square150x150Logo", 150, 150, TILE_PADDING, 4.0),
    // 宽磁贴
    VariantSpec::new("Wide310x150Logo", 310, 150, TILE_PADDING, 1.0),
    VariantSpec::new("Wide310x150Logo", 310, 150, TILE_PADDING, 1.25),
    VariantSpec::new("Wide310x150Logo", 310, 150, TILE_PADDING, 1.5),
    VariantSpec::new("Wide310x150Logo", 310, 150, TILE_PADDING, 2.0),
    VariantSpec::new("Wide310x150Logo", 310, 150, TILE_PADDING, 4.0),
    // 大磁贴
    VariantSpec::new("LargeTile", 310, 310, TILE_PADDING, 1.0),
    VariantSpec::new("LargeTile", 310, 310, TILE_PADDING, 1.25),
    VariantSpec::new("LargeTile", 310, 310, TILE_PADDING, 1.5),
    VariantSpec::new("LargeTile", 310, 310, TILE_PADDING, 2.0),
    VariantSpec::new("LargeTile", 310, 310, TILE_PADDING, 4.0),
    // 应用图标
    VariantSpec::new("Square44x44Logo", 44, 44, APP_ICON_PADDING, 1.0),
    VariantSpec::new("Square44x44Logo", 44, 44, APP_ICON_PADDING, 1.25),
    VariantSpec::new("Square44x44Logo", 44, 44, APP_ICON_PADDING, 1.5),
    VariantSpec::new("Square44x44Logo", 44, 44, APP_ICON_PADDING, 2.0),
    VariantSpec::new("Square44x44Logo", 44, 44, APP_ICON_PADDING, 4.0),
    // 应用图标 target size（plated）
    VariantSpec::target_size("Square44x44Logo.targetsize-16", 16),
    VariantSpec::target_size("Square44x44Logo.targetsize-20", 20),
    VariantSpec::target_size("Square44x44Logo.targetsize-24", 24),
    VariantSpec::target_size("Square44x44Logo.targetsize-30", 30),
    VariantSpec::target_size("Square44x44Logo.targetsize-32", 32),
    VariantSpec::target_size("Square44x44Logo.targetsize-36", 36),
    VariantSpec::target_size("Square44x44Logo.targetsize-40", 40),
    VariantSpec::target_size("Square44x44Logo.targetsize-48", 48),
    VariantSpec::target_size("Square44x44Logo.targetsize-60", 60),
    VariantSpec::target_size("Square44x44Logo.targetsize-64", 64),
    VariantSpec::target_size("Square44x44Logo.targetsize-72", 72),
    VariantSpec::target_size("Square44x44Logo.targetsize-80", 80),
    VariantSpec::target_size("Square44x44Logo.targetsize-96", 96),
    VariantSpec::target_size("Square44x44Logo.targetsize-256", 256),
    // 应用图标 target size（unplated）
    VariantSpec::target_size("Square44x44Logo.targetsize-16_altform-unplated", 16),
    VariantSpec::target_size("Square44x44Logo.targetsize-20_altform-unplated", 20),
    VariantSpec::target_size("Square44x44Logo.targetsize-24_altform-unplated", 24),
    VariantSpec::target_size("Square44x44Logo.targetsize-30_altform-unplated", 30),
    VariantSpec::target_size("Square44x44Logo.targetsize-32_altform-unplated", 32),
    VariantSpec::target_size("Square44x44Logo.targetsize-36_altform-unplated", 36),
    VariantSpec::target_size("Square44x44Logo.targetsize-40_altform-unplated", 40),
    VariantSpec::target_size("Square44x44Logo.targetsize-48_altform-unplated", 48),
    VariantSpec::target_size("Square44x44Logo.targetsize-60_altform-unplated", 60),
    VariantSpec::target_size("Square44x44Logo.targetsize-64_altform-unplated", 64),
    VariantSpec::target_size("Square44x44Logo.targetsize-72_altform-unplated", 72),
    VariantSpec::target_size("Square44x44Logo.targetsize-80_altform-unplated", 80),
    VariantSpec::target_size("Square44x44Logo.targetsize-96_altform-unplated", 96),
    VariantSpec::target_size("Square44x44Logo.targetsize-256_altform-unplated", 256),
    // 应用图标 target size（light unplated）
    VariantSpec::target_size("Square44x44Logo.targetsize-16_altform-lightunplated", 16),
    VariantSpec::target_size("Square44x44Logo.targetsize-20_altform-lightunplated", 20),
    VariantSpec::target_size("Square44x44Logo.targetsize-24_altform-lightunplated", 24),
    VariantSpec::target_size("Square44x44Logo.targetsize-30_altform-lightunplated", 30),
    VariantSpec::target_size("Square44x44Logo.targetsize-32_altform-lightunplated", 32),
    VariantSpec::target_size("Square44x44Logo.targetsize-36_altform-lightunplated", 36),
    VariantSpec::target_size("Square44x44Logo.targetsize-40_altform-lightunplated", 40),
    VariantSpec::target_size("Square44x44Logo.targetsize-48_altform-lightunplated", 48),
    VariantSpec::target_size("Square44x44Logo.targetsize-60_altform-lightunplated", 60),
    VariantSpec::target_size("Square44x44Logo.targetsize-64_altform-lightunplated", 64),
    VariantSpec::target_size("Square44x44Logo.targetsize-72_altform-lightunplated", 72),
    VariantSpec::target_size("Square44x44Logo.targetsize-80_altform-lightunplated", 80),
    VariantSpec::target_size("Square44x44Logo.targetsize-96_altform-lightunplated", 96),
    VariantSpec::target_size("Square44x44Logo.targetsize-256_altform-lightunplated", 256),
    // 启动画面
    VariantSpec::new("SplashScreen", 620, 300, TILE_PADDING, 1.0),
    VariantSpec::new("SplashScreen", 620, 300, TILE_PADDING, 1.25),
    VariantSpec::new("SplashScreen", 620, 300, TILE_PADDING, 1.5),
    VariantSpec::new("SplashScreen", 620, 300, TILE_PADDING, 2.0),
    VariantSpec::new("SplashScreen", 620, 300, TILE_PADDING, 4.0),
    // 角标
    VariantSpec::new("BadgeLogo", 24, 24, 0.0, 1.0),
    VariantSpec::new("BadgeLogo", 24, 24, 0.0, 1.25),
    VariantSpec::new("BadgeLogo", 24, 24, 0.0, 1.5),
    VariantSpec::new("BadgeLogo", 24, 24, 0.0, 2.0),
    VariantSpec::new("BadgeLogo", 24, 24, 0.0, 4.0),
    // 商店图标
    VariantSpec::new("StoreLogo", 50, 50, TILE_PADDING, 1.0),
    VariantSpec::new("StoreLogo", 50, 50, TILE_PADDING, 1.25),
    VariantSpec::new("StoreLogo", 50, 50, TILE_PADDING, 1.5),
    VariantSpec::new("StoreLogo", 50, 50, TILE_PADDING, 2.0),
    VariantSpec::new("StoreLogo", 50, 50, TILE_PADDING, 4.0),
];

/// 完整图标清单（固定顺序）。
pub fn catalog() -> &'static [VariantSpec] {
    &CATALOG
}

/// 清单对应的全部输出文件名，供清单生成方引用。
pub fn expected_file_names() -> Vec<String> {
    CATALOG.iter().map(VariantSpec::file_name).collect()
}

/// 按名称与缩放查找单个条目。
pub fn find(name: &str, scale: f64) -> Option<&'static VariantSpec> {
    CATALOG
        .iter()
        .find(|spec| spec.name == name && (spec.scale - scale).abs() < f64::EPSILON)
}
