//! # 后台执行层
//!
//! ## 设计思路
//!
//! 整个生成负载（解码一次 + 约 80 次缩放/编码）作为一个整体交给独立工作线程，
//! 调用方只拿到一个 `PipelineHandle`，等待唯一的完成信号，不关心任何单个图标。
//!
//! ## 实现思路
//!
//! - 完成信号使用 `tokio::sync::oneshot`：异步调用方 `.await`，同步调用方
//!   `wait_blocking()`，不要求调用方处在 tokio 运行时中。
//! - 工作线程 panic 时发送端随之丢弃，等待方得到 `IconError::Worker`。
//! - 不支持取消，也不设超时；超时由调用方自行包裹。

use std::thread;

use tokio::sync::oneshot;

use super::{IconError, IconPipeline, PipelineConfig, PipelineReport};

type Completion = Result<PipelineReport, IconError>;

/// 一次后台生成的完成句柄。
#[derive(Debug)]
pub struct PipelineHandle {
    receiver: oneshot::Receiver<Completion>,
}

impl PipelineHandle {
    /// 异步等待完成信号。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use appx_icons::icon_pipeline::{PipelineConfig, spawn_pipeline};
    ///
    /// # async fn demo() -> Result<(), appx_icons::icon_pipeline::IconError> {
    /// let handle = spawn_pipeline(PipelineConfig::default())?;
    /// let report = handle.wait().await?;
    /// println!("{:?}", report.mode);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn wait(self) -> Completion {
        self.receiver.await.map_err(worker_gone)?
    }

    /// 阻塞等待完成信号。不能在异步运行时的线程中调用。
    pub fn wait_blocking(self) -> Completion {
        self.receiver.blocking_recv().map_err(worker_gone)?
    }
}

fn worker_gone(_: oneshot::error::RecvError) -> IconError {
    IconError::Worker("后台生成任务意外退出，未发送完成信号".to_string())
}

impl IconPipeline {
    /// 在独立工作线程上执行生成，立即返回完成句柄。
    pub fn spawn(self) -> Result<PipelineHandle, IconError> {
        let (sender, receiver) = oneshot::channel();
        log::info!(
            "🚀 启动后台图标生成 - logo={} output={}",
            self.config()
                .logo_path
                .as_ref()
                .map_or_else(|| "<default>".to_string(), |p| p.display().to_string()),
            self.config().output_dir.display()
        );

        thread::Builder::new()
            .name("icon-pipeline".to_string())
            .spawn(move || {
                let result = self.run();
                if let Err(err) = &result {
                    log::error!(
                        "❌ 图标生成失败 - code={} stage={} {}",
                        err.code(),
                        err.stage(),
                        err
                    );
                }
                if sender.send(result).is_err() {
                    log::warn!("⚠️ 调用方已放弃等待，完成信号被丢弃");
                }
            })
            .map_err(|e| IconError::Worker(format!("无法启动后台生成线程：{}", e)))?;

        Ok(PipelineHandle { receiver })
    }
}

/// 校验配置并在后台启动一次生成。
pub fn spawn_pipeline(config: PipelineConfig) -> Result<PipelineHandle, IconError> {
    IconPipeline::new(config)?.spawn()
}
