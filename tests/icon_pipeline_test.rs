use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use appx_icons::icon_pipeline::{
    IconError, IconLayout, PipelineConfig, PipelineMode, catalog, expected_file_names,
    spawn_pipeline,
};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba, RgbaImage};

static TEMP_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

fn unique_temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock error")
        .as_nanos();
    let seq = TEMP_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("appx-icons-it-{nanos}-{seq}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_logo(dir: &Path, image: RgbaImage) -> PathBuf {
    let path = dir.join("logo.png");
    DynamicImage::ImageRgba8(image)
        .save_with_format(&path, ImageFormat::Png)
        .expect("write logo png");
    path
}

fn file_names_in(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

fn generate_config(root: &Path, logo: PathBuf) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.logo_path = Some(logo);
    config.output_dir = root.join("out");
    config.default_icons_dir = root.join("unused-defaults");
    config.render_threads = Some(4);
    config
}

#[test]
fn opaque_logo_generates_full_icon_set() {
    let root = unique_temp_dir();
    let logo = write_logo(
        &root,
        ImageBuffer::from_pixel(512, 512, Rgba([30, 90, 200, 255])),
    );

    let report = spawn_pipeline(generate_config(&root, logo))
        .expect("spawn")
        .wait_blocking()
        .expect("generation should succeed");

    assert_eq!(report.mode, PipelineMode::Generated);
    assert_eq!(report.files.len(), catalog().len());

    let out = root.join("out");
    let expected: BTreeSet<String> = expected_file_names().into_iter().collect();
    assert_eq!(expected.len(), 82);
    assert_eq!(file_names_in(&out), expected);

    for spec in catalog() {
        let path = out.join(spec.file_name());
        let bytes = std::fs::read(&path).expect("read icon");
        assert!(!bytes.is_empty(), "{} is empty", spec.file_name());

        let decoded = image::load_from_memory(&bytes).expect("decode icon");
        let layout = IconLayout::compute(spec, 512, 512).expect("layout");
        assert_eq!(
            (decoded.width(), decoded.height()),
            (layout.canvas_width, layout.canvas_height),
            "unexpected canvas for {}",
            spec.file_name()
        );
    }

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn uniform_logo_with_trim_still_generates() {
    let root = unique_temp_dir();
    let logo = write_logo(
        &root,
        ImageBuffer::from_pixel(128, 96, Rgba([255, 255, 255, 255])),
    );

    let mut config = generate_config(&root, logo);
    config.trim_logo = true;

    let report = spawn_pipeline(config)
        .expect("spawn")
        .wait_blocking()
        .expect("trim failure must not abort generation");

    assert_eq!(report.files.len(), 82);
    assert!(report.files.iter().all(|path| path.is_file()));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn missing_logo_reports_source_not_found() {
    let root = unique_temp_dir();
    let config = generate_config(&root, root.join("missing.png"));

    let result = spawn_pipeline(config).expect("spawn").wait_blocking();

    assert!(matches!(result, Err(IconError::SourceNotFound(_))));
    assert!(!root.join("out").join("StoreLogo.scale-100.png").exists());

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn single_variant_write_failure_fails_whole_run() {
    let root = unique_temp_dir();
    let logo = write_logo(
        &root,
        ImageBuffer::from_pixel(256, 256, Rgba([30, 90, 200, 255])),
    );
    // 同名目录占位，使该图标写盘失败
    std::fs::create_dir_all(root.join("out/StoreLogo.scale-100.png")).expect("mkdir blocker");

    let err = spawn_pipeline(generate_config(&root, logo))
        .expect("spawn")
        .wait_blocking()
        .expect_err("one unwritable variant must fail the run");

    assert!(matches!(err, IconError::Write { .. }));
    assert_eq!(err.code(), "write");
    assert_eq!(err.variant(), Some("StoreLogo.scale-100.png"));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn without_logo_default_icons_are_mirrored() {
    let root = unique_temp_dir();
    let defaults = root.join("defaults");
    std::fs::create_dir_all(defaults.join("extra")).expect("mkdir defaults");
    std::fs::write(defaults.join("StoreLogo.scale-100.png"), b"store").expect("write");
    std::fs::write(defaults.join("extra/SmallTile.scale-200.png"), b"tile").expect("write");

    let mut config = PipelineConfig::default();
    config.default_icons_dir = defaults;
    config.output_dir = root.join("out");

    let report = spawn_pipeline(config)
        .expect("spawn")
        .wait_blocking()
        .expect("copy defaults");

    assert_eq!(report.mode, PipelineMode::CopiedDefaults);
    assert_eq!(report.files.len(), 2);
    assert_eq!(
        std::fs::read(root.join("out/StoreLogo.scale-100.png")).expect("read"),
        b"store"
    );
    assert_eq!(
        std::fs::read(root.join("out/extra/SmallTile.scale-200.png")).expect("read"),
        b"tile"
    );

    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn async_caller_awaits_single_completion() {
    let root = unique_temp_dir();
    let logo = write_logo(
        &root,
        ImageBuffer::from_pixel(300, 200, Rgba([200, 40, 40, 255])),
    );

    let report = spawn_pipeline(generate_config(&root, logo))
        .expect("spawn")
        .wait()
        .await
        .expect("generation should succeed");

    assert_eq!(report.files.len(), 82);

    let _ = std::fs::remove_dir_all(root);
}
