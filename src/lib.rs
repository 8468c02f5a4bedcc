// src/lib.rs
//! Pluggable user storage.
//!
//! A [`UserStorage`] backend saves [`User`] records keyed by email and loads
//! them back by point lookup. Two backends ship:
//!
//! - [`MemoryStorage`]: process-local map, the only backend that stores data
//! - [`FileStorage`]: placeholder bound to a base path, reports
//!   [`BackendStatus::Unimplemented`] and never touches the file system
//!
//! ```
//! use user_storage::{MemoryStorage, User, UserStorage};
//!
//! let mut storage = MemoryStorage::new();
//! storage.save(User::new("A", "a@x.com", 30)).unwrap();
//! assert!(storage.load("a@x.com").unwrap().is_some());
//! assert!(storage.load("b@x.com").unwrap().is_none());
//! ```

pub mod config;
pub mod errors;
pub mod logging;
pub mod storage;
pub mod types;

// 重新导出常用类型和函数
pub use config::StorageConfig;
pub use errors::StorageError;
pub use storage::{open_storage, FileStorage, MemoryStorage, UserStorage};
pub use types::{BackendKind, BackendStatus, User};
