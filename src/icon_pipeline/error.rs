//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 除 `Trim` 外，所有分支对本次生成都是致命的：调用方拿到 `Err` 即可判定
//! “没有产出可用的图标集”。`Trim` 只在加载阶段内部流转，随后被吞掉。

/// 图标生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源图片不存在或不可读：{0}")]
    SourceNotFound(String),

    #[error("源图片解码失败：{0}")]
    SourceDecode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("裁边失败：{0}")]
    Trim(String),

    #[error("图标渲染失败（{variant}）：{reason}")]
    Render { variant: String, reason: String },

    #[error("图标写入失败（{variant}）：{reason}")]
    Write { variant: String, reason: String },

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),

    #[error("后台任务错误：{0}")]
    Worker(String),
}

impl IconError {
    /// 稳定错误码，供日志检索与上层分支判断。
    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceNotFound(_) => "source_not_found",
            Self::SourceDecode(_) => "source_decode",
            Self::ResourceLimit(_) => "resource_limit",
            Self::Trim(_) => "trim",
            Self::Render { .. } => "render",
            Self::Write { .. } => "write",
            Self::FileSystem(_) => "file_system",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Worker(_) => "worker",
        }
    }

    /// 出错所在阶段。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::SourceNotFound(_) | Self::SourceDecode(_) | Self::ResourceLimit(_) => "load",
            Self::Trim(_) => "trim",
            Self::Render { .. } | Self::Write { .. } => "render",
            Self::FileSystem(_) => "output",
            Self::InvalidConfig(_) => "config",
            Self::Worker(_) => "worker",
        }
    }

    /// 出错的图标文件名（仅渲染/写入阶段有值）。
    pub fn variant(&self) -> Option<&str> {
        match self {
            Self::Render { variant, .. } | Self::Write { variant, .. } => Some(variant),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_errors_carry_variant_name() {
        let err = IconError::Write {
            variant: "StoreLogo.scale-200.png".to_string(),
            reason: "disk full".to_string(),
        };

        assert_eq!(err.variant(), Some("StoreLogo.scale-200.png"));
        assert_eq!(err.stage(), "render");
        assert!(err.to_string().contains("StoreLogo.scale-200.png"));
    }

    #[test]
    fn load_errors_have_no_variant() {
        let err = IconError::SourceDecode("bad header".to_string());
        assert_eq!(err.variant(), None);
        assert_eq!(err.code(), "source_decode");
        assert_eq!(err.stage(), "load");
    }
}
