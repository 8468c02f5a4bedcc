//! Behaviour shared by every storage backend, driven through the trait.
//!
//! Backends are single-threaded: every test owns its storage and calls it
//! sequentially. Nothing here holds a backend across threads; `save` needs
//! `&mut self`, so concurrent writers are rejected at compile time (see the
//! `compile_fail` example on `UserStorage`).

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;
use user_storage::{
    open_storage, BackendKind, BackendStatus, FileStorage, MemoryStorage, StorageConfig, User,
    UserStorage,
};

fn user_strategy() -> impl Strategy<Value = User> {
    ("[a-zA-Z ]{0,12}", "[a-z0-9.]{1,8}@[a-z]{1,6}\\.(com|org)", any::<u32>())
        .prop_map(|(name, email, age)| User::new(name, email, age))
}

#[test]
fn test_memory_scenario() {
    let mut storage = MemoryStorage::new();
    let user = User::new("A", "a@x.com", 0);

    storage.save(user.clone()).unwrap();

    assert_eq!(storage.load("a@x.com").unwrap(), Some(user));
    assert_eq!(storage.load("b@x.com").unwrap(), None);
}

#[test]
fn test_backend_identity() {
    let memory = MemoryStorage::new();
    let file = FileStorage::new("./data");

    assert_eq!(memory.name(), "memory");
    assert_eq!(memory.kind(), BackendKind::Memory);
    assert_eq!(memory.status(), BackendStatus::Ready);

    assert_eq!(file.name(), "file");
    assert_eq!(file.kind(), BackendKind::File);
    assert_eq!(file.status(), BackendStatus::Unimplemented);
}

#[test]
fn test_name_is_fixed_after_writes() {
    let mut storage = MemoryStorage::new();
    for i in 0..10 {
        storage.save(User::new("U", format!("u{}@x.com", i), i)).unwrap();
    }
    assert_eq!(storage.name(), "memory");
    assert_eq!(storage.len(), 10);
}

#[test]
fn test_miss_is_not_an_error() {
    let storages: Vec<Box<dyn UserStorage>> = vec![
        Box::new(MemoryStorage::new()) as Box<dyn UserStorage>,
        Box::new(FileStorage::new("/nonexistent")),
    ];

    for storage in &storages {
        assert!(matches!(storage.load("nobody@x.com"), Ok(None)), "{}", storage.name());
    }
}

#[test]
fn test_sequential_writes_then_reads() {
    let mut storage = MemoryStorage::new();
    let shared: &mut dyn UserStorage = &mut storage;

    shared.save(User::new("A", "a@x.com", 1)).unwrap();
    shared.save(User::new("B", "b@x.com", 2)).unwrap();

    let reader: &dyn UserStorage = &storage;
    assert_eq!(reader.load("a@x.com").unwrap().map(|u| u.age), Some(1));
    assert_eq!(reader.load("b@x.com").unwrap().map(|u| u.age), Some(2));
}

#[test]
fn test_independent_instances_do_not_share_state() {
    let mut first = MemoryStorage::new();
    let second = MemoryStorage::new();

    first.save(User::new("A", "a@x.com", 1)).unwrap();

    assert!(second.load("a@x.com").unwrap().is_none());
}

#[test_case(BackendKind::Memory, "memory", true ; "memory backend stores data")]
#[test_case(BackendKind::File, "file", false ; "file backend is a stub")]
fn test_open_storage(kind: BackendKind, name: &str, keeps_data: bool) {
    let config = StorageConfig { backend: kind, ..StorageConfig::default() };
    let mut storage = open_storage(&config);

    assert_eq!(storage.name(), name);
    assert_eq!(storage.status().is_ready(), keeps_data);

    storage.save(User::new("A", "a@x.com", 30)).unwrap();
    assert_eq!(storage.load("a@x.com").unwrap().is_some(), keeps_data);
}

proptest! {
    #[test]
    fn memory_round_trip(user in user_strategy()) {
        let mut storage = MemoryStorage::new();
        storage.save(user.clone()).unwrap();
        prop_assert_eq!(storage.load(user.email()).unwrap(), Some(user));
    }

    #[test]
    fn memory_last_write_wins(first in user_strategy(), mut second in user_strategy()) {
        second.email = first.email.clone();

        let mut storage = MemoryStorage::new();
        storage.save(first.clone()).unwrap();
        storage.save(second.clone()).unwrap();

        prop_assert_eq!(storage.len(), 1);
        prop_assert_eq!(storage.load(first.email()).unwrap(), Some(second));
    }

    #[test]
    fn file_storage_never_returns_saved_users(user in user_strategy()) {
        let mut storage = FileStorage::new("./data");
        storage.save(user.clone()).unwrap();
        prop_assert_eq!(storage.load(user.email()).unwrap(), None);
    }
}
