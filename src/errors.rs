//! 存储error类型定义

use thiserror::Error;

/// 存储error
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing medium cannot be reached. No shipped backend returns this yet.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown storage backend: {0}")]
    UnknownBackend(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StorageError {
    /// fetch error代码（稳定，可用于日志和脚本判断）
    pub fn error_code(&self) -> &str {
        match self {
            Self::Unavailable(_) => "storage_unavailable",
            Self::UnknownBackend(_) => "unknown_backend",
            Self::Config(_) => "config_error",
        }
    }
}

impl From<toml::de::Error> for StorageError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
