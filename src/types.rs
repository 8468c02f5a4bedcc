//! 存储层类型定义

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::StorageError;

/// User record, keyed by email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,
    /// Email (lookup key, compared verbatim)
    pub email: String,
    /// Age
    pub age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

/// 存储后端类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// 内存
    #[default]
    Memory,
    /// 文件
    File,
}

impl BackendKind {
    /// Backend identifier, also used as the storage `name()`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File => "file",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            _ => Err(StorageError::UnknownBackend(s.to_string())),
        }
    }
}

/// Whether a backend actually stores anything.
///
/// `Unimplemented` backends accept every call and persist nothing; callers
/// that need durable writes should check this before relying on `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Ready,
    Unimplemented,
}

impl BackendStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::Unimplemented => f.write_str("unimplemented"),
        }
    }
}
