//! 存储抽象层
//!
//! 提供user数据存储的抽象接口，支持多种存储后端

pub mod r#trait;
pub mod memory;
pub mod file;

// 重新导出
pub use r#trait::UserStorage;
pub use memory::MemoryStorage;
pub use file::FileStorage;

use tracing::info;

use crate::config::StorageConfig;
use crate::types::BackendKind;

/// 根据配置创建存储后端
pub fn open_storage(config: &StorageConfig) -> Box<dyn UserStorage> {
    let storage: Box<dyn UserStorage> = match config.backend {
        BackendKind::Memory => Box::new(MemoryStorage::new()),
        BackendKind::File => Box::new(FileStorage::new(config.base_path.clone())),
    };

    info!("Opened {} storage (status: {})", storage.name(), storage.status());
    storage
}
