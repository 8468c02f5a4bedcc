//! 内存存储实现（用于开发和测试）

use std::collections::HashMap;
use tracing::debug;

use super::r#trait::UserStorage;
use crate::errors::StorageError;
use crate::types::{BackendKind, User};

/// 内存存储
#[derive(Debug)]
pub struct MemoryStorage {
    name: String,

    /// user列表（email -> User）
    users: HashMap<String, User>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    /// 创建新的内存存储
    pub fn new() -> Self {
        Self {
            name: BackendKind::Memory.as_str().to_string(),
            users: HashMap::new(),
        }
    }

    /// Deleteuser, returning the removed record
    pub fn remove(&mut self, email: &str) -> Option<User> {
        let removed = self.users.remove(email);
        if removed.is_some() {
            debug!("user已从内存存储删除: email={}", email);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStorage for MemoryStorage {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    fn save(&mut self, user: User) -> Result<(), StorageError> {
        let email = user.email.clone();
        let replaced = self.users.insert(email.clone(), user).is_some();

        debug!("user已保存到内存存储: email={}, replaced={}", email, replaced);

        Ok(())
    }

    fn load(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(self.users.get(email).cloned())
    }
}
