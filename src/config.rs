//! 存储配置管理

use serde::Deserialize;
use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::errors::StorageError;
use crate::types::BackendKind;

/// Environment variable selecting the backend (`memory` or `file`)
pub const BACKEND_ENV: &str = "USER_STORAGE_BACKEND";
/// Environment variable holding the file backend's base path
pub const BASE_PATH_ENV: &str = "USER_STORAGE_BASE_PATH";

/// 存储配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// 存储后端
    #[serde(default)]
    pub backend: BackendKind,

    /// 文件后端的根目录（memory后端忽略）
    #[serde(default = "StorageConfig::default_base_path")]
    pub base_path: PathBuf,
}

/// Table holding the storage keys when they are not at the top level
const SECTION: &str = "storage";

impl StorageConfig {
    fn default_base_path() -> PathBuf {
        PathBuf::from("./data")
    }

    /// from环境变量加载配置
    pub fn from_env() -> Result<Self, StorageError> {
        let backend = match std::env::var(BACKEND_ENV) {
            Ok(value) => value.parse()?,
            Err(VarError::NotPresent) => BackendKind::default(),
            Err(VarError::NotUnicode(raw)) => {
                return Err(StorageError::Config(format!(
                    "{} is not valid UTF-8: {:?}",
                    BACKEND_ENV, raw
                )))
            }
        };
        let base_path = std::env::var_os(BASE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_base_path);

        Ok(Self { backend, base_path })
    }

    /// Parse either a `[storage]` table or bare top-level keys.
    ///
    /// A file using the table may not carry any other key.
    pub fn from_toml_str(content: &str) -> Result<Self, StorageError> {
        let mut table: toml::Table = toml::from_str(content)?;

        let Some(section) = table.remove(SECTION) else {
            return Ok(toml::Value::Table(table).try_into()?);
        };

        if let Some(extra) = table.keys().next() {
            return Err(StorageError::Config(format!(
                "unexpected key `{}` alongside [{}]",
                extra, SECTION
            )));
        }

        Ok(section.try_into()?)
    }

    /// from TOML文件加载配置
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| StorageError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            base_path: Self::default_base_path(),
        }
    }
}
