use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuciError {
    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("未知的报告器: {0}")]
    UnknownReporter(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML 解析错误: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

// Add conversion from anyhow::Error
impl From<anyhow::Error> for RuciError {
    fn from(err: anyhow::Error) -> Self {
        RuciError::Other(err.to_string())
    }
}

/// Result type for ruci crate
pub type Result<T> = std::result::Result<T, RuciError>;
