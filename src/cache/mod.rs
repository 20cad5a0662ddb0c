// src/cache/mod.rs

pub mod current_account;
pub mod storage;

pub use current_account::{AccountIntegrity, CurrentAccountAdapter, CURRENT_ACCOUNT_KEY};
pub use storage::{FileStorage, GetStorage, KeyValueStorage, MemoryStorage, SetStorage, StorageError};
