pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const LANGUAGE_KEY: &str = "language";

/// Key-value view of the durable client-side store. Reads and writes are
/// individual operations with no transactional semantics.
pub trait KvStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Browser `localStorage`. All failures degrade to "key absent": a blocked
/// storage area behaves like an empty one.
pub struct LocalStorage;

impl LocalStorage {
    fn backing() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KvStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::backing()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.set_item(key, value);
        }
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
pub(crate) mod mem {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::KvStore;

    #[derive(Debug, Default)]
    pub(crate) struct MemStore(RefCell<HashMap<String, String>>);

    impl KvStore for MemStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn delete(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }
}
