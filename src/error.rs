//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 库内部的图标生成错误统一为 `IconError`；命令行入口在其之上
//! 再包一层 `AppError`，把参数错误与 I/O 错误也收拢到同一个类型。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 与 `std::io::Error` 提供 `From` 转换，入口处直接用 `?`。

use crate::icon_pipeline::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（加载 / 渲染 / 写盘）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 命令行参数或配置文件错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl AppError {
    /// 进程退出码：参数/配置错误为 2，其余为 1。
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) | AppError::Icon(IconError::InvalidConfig(_)) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_error_converts_and_keeps_message() {
        let err: AppError = IconError::SourceNotFound("logo.png".to_string()).into();
        assert!(matches!(err, AppError::Icon(IconError::SourceNotFound(_))));
        assert!(err.to_string().contains("logo.png"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn config_errors_use_usage_exit_code() {
        assert_eq!(AppError::Config("too many args".to_string()).exit_code(), 2);
        let invalid: AppError = IconError::InvalidConfig("threads".to_string()).into();
        assert_eq!(invalid.exit_code(), 2);
    }
}
