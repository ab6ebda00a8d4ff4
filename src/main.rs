//! # 打包应用图标生成器 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与结果输出。
//! 生成逻辑详见 `lib.rs` 架构文档。
//!
//! 用法：`appx-icons [config.json]`

use std::path::PathBuf;
use std::process::ExitCode;

use appx_icons::error::AppError;
use appx_icons::icon_pipeline::{PipelineConfig, spawn_pipeline};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("❌ {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = match parse_config_path(std::env::args().skip(1))? {
        Some(path) => {
            log::info!("⚙️ 读取配置文件: {}", path.display());
            PipelineConfig::from_json_file(&path)?
        }
        None => {
            log::info!("⚙️ 未指定配置文件，使用默认配置");
            PipelineConfig::default()
        }
    };

    let report = spawn_pipeline(config)?.wait_blocking()?;

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| AppError::Config(format!("无法序列化生成报告：{}", e)))?;
    println!("{json}");

    Ok(())
}

fn parse_config_path(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>, AppError> {
    let path = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        return Err(AppError::Config(format!(
            "只接受一个配置文件参数，多余参数：{}",
            extra
        )));
    }
    Ok(path)
}
