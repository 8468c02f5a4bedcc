//! 存储层trait定义

use crate::errors::StorageError;
use crate::types::{BackendKind, BackendStatus, User};

/// user存储trait
///
/// Methods take `&mut self` to write, so a backend is only ever driven from
/// one place at a time. Sharing one across threads needs an external lock.
///
/// Writing through a shared reference does not compile:
///
/// ```compile_fail
/// use user_storage::{MemoryStorage, User, UserStorage};
///
/// fn save_shared(storage: &MemoryStorage) {
///     storage.save(User::new("A", "a@x.com", 30)).unwrap();
/// }
/// ```
pub trait UserStorage {
    /// Backend identifier, fixed at construction
    fn name(&self) -> &str;

    fn kind(&self) -> BackendKind;

    /// 保存user（同一Email覆盖旧记录）
    fn save(&mut self, user: User) -> Result<(), StorageError>;

    /// 通过Email查找user，未找到返回 `Ok(None)`
    fn load(&self, email: &str) -> Result<Option<User>, StorageError>;

    fn status(&self) -> BackendStatus {
        BackendStatus::Ready
    }
}
