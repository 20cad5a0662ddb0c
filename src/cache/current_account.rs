// src/cache/current_account.rs
use std::sync::Arc;
use tracing::{debug, error, info};

use super::storage::KeyValueStorage;
use crate::common::{safe_token_log, DomainError};
use crate::usecases::AccountModel;

/// Key under which the authenticated account is cached
pub const CURRENT_ACCOUNT_KEY: &str = "account";

/// Which identity fields an account needs before it may be cached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountIntegrity {
    /// Only `access_token` must be non-empty
    TokenOnly,
    /// Both `access_token` and `name` must be non-empty
    #[default]
    TokenAndName,
}

impl AccountIntegrity {
    pub fn is_complete(&self, account: &AccountModel) -> bool {
        match self {
            AccountIntegrity::TokenOnly => !account.access_token.is_empty(),
            AccountIntegrity::TokenAndName => {
                !account.access_token.is_empty() && !account.name.is_empty()
            }
        }
    }
}

/// Guards the single cached-account slot.
///
/// Incomplete accounts are rejected before anything is written, so the
/// store never holds a partially authenticated session.
pub struct CurrentAccountAdapter {
    storage: Arc<dyn KeyValueStorage>,
    integrity: AccountIntegrity,
}

impl CurrentAccountAdapter {
    pub fn new(storage: Arc<dyn KeyValueStorage>, integrity: AccountIntegrity) -> Self {
        Self { storage, integrity }
    }

    pub fn set_current_account(&self, account: Option<&AccountModel>) -> Result<(), DomainError> {
        let account = match account {
            Some(account) if self.integrity.is_complete(account) => account,
            _ => {
                debug!(integrity = ?self.integrity, "Refusing to cache incomplete account");
                return Err(DomainError::Unexpected);
            }
        };

        let value = serde_json::to_string(account).map_err(|e| {
            error!(error = %e, "Failed to serialize account");
            DomainError::Unexpected
        })?;

        self.storage
            .set(CURRENT_ACCOUNT_KEY, &value)
            .map_err(|e| {
                error!(error = %e, "Failed to write current account");
                DomainError::Unexpected
            })?;

        info!(token = %safe_token_log(&account.access_token), "Current account cached");
        Ok(())
    }

    pub fn get_current_account(&self) -> Result<Option<AccountModel>, DomainError> {
        let raw = self.storage.get(CURRENT_ACCOUNT_KEY).map_err(|e| {
            error!(error = %e, "Failed to read current account");
            DomainError::Unexpected
        })?;

        match raw {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                error!(error = %e, "Cached account is not valid JSON");
                DomainError::Unexpected
            }),
        }
    }

    pub fn clear_current_account(&self) -> Result<(), DomainError> {
        self.storage.remove(CURRENT_ACCOUNT_KEY).map_err(|e| {
            error!(error = %e, "Failed to clear current account");
            DomainError::Unexpected
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::storage::{GetStorage, MemoryStorage, SetStorage, StorageError};
    use std::sync::Mutex;

    #[derive(Default)]
    struct StorageSpy {
        writes: Mutex<Vec<(String, String)>>,
        value: Mutex<Option<String>>,
        read_keys: Mutex<Vec<String>>,
    }

    impl SetStorage for StorageSpy {
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes
                .lock()
                .unwrap()
                .push((key.to_string(), value.to_string()));
            Ok(())
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            *self.value.lock().unwrap() = None;
            Ok(())
        }
    }

    impl GetStorage for StorageSpy {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.read_keys.lock().unwrap().push(key.to_string());
            Ok(self.value.lock().unwrap().clone())
        }
    }

    fn make_sut(integrity: AccountIntegrity) -> (CurrentAccountAdapter, Arc<StorageSpy>) {
        let spy = Arc::new(StorageSpy::default());
        (CurrentAccountAdapter::new(spy.clone(), integrity), spy)
    }

    #[test]
    fn test_set_writes_json_once_under_account_key() {
        let (sut, spy) = make_sut(AccountIntegrity::TokenAndName);

        sut.set_current_account(Some(&AccountModel::new("t", "n")))
            .unwrap();

        let writes = spy.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, "account");
        assert_eq!(writes[0].1, r#"{"accessToken":"t","name":"n"}"#);
    }

    #[test]
    fn test_set_rejects_missing_account_without_writing() {
        let (sut, spy) = make_sut(AccountIntegrity::TokenAndName);

        let result = sut.set_current_account(None);

        assert_eq!(result, Err(DomainError::Unexpected));
        assert_eq!(spy.writes.lock().unwrap().len(), 0);
    }

    #[test]
    fn test_set_rejects_incomplete_account_without_writing() {
        let (sut, spy) = make_sut(AccountIntegrity::TokenAndName);

        assert_eq!(
            sut.set_current_account(Some(&AccountModel::new("t", ""))),
            Err(DomainError::Unexpected)
        );
        assert_eq!(
            sut.set_current_account(Some(&AccountModel::new("", "n"))),
            Err(DomainError::Unexpected)
        );
        assert_eq!(spy.writes.lock().unwrap().len(), 0);
    }

    #[test]
    fn test_token_only_mode_accepts_nameless_account() {
        let (sut, spy) = make_sut(AccountIntegrity::TokenOnly);

        sut.set_current_account(Some(&AccountModel::new("t", "")))
            .unwrap();
        assert_eq!(spy.writes.lock().unwrap().len(), 1);

        assert_eq!(
            sut.set_current_account(Some(&AccountModel::new("", "n"))),
            Err(DomainError::Unexpected)
        );
        assert_eq!(spy.writes.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_get_reads_account_key() {
        let (sut, spy) = make_sut(AccountIntegrity::TokenAndName);
        *spy.value.lock().unwrap() = Some(r#"{"accessToken":"t","name":"n"}"#.to_string());

        let account = sut.get_current_account().unwrap();

        assert_eq!(spy.read_keys.lock().unwrap().as_slice(), ["account"]);
        assert_eq!(account, Some(AccountModel::new("t", "n")));
    }

    #[test]
    fn test_get_returns_none_when_absent() {
        let (sut, _spy) = make_sut(AccountIntegrity::TokenAndName);
        assert_eq!(sut.get_current_account(), Ok(None));
    }

    #[test]
    fn test_get_rejects_garbage() {
        let (sut, spy) = make_sut(AccountIntegrity::TokenAndName);
        *spy.value.lock().unwrap() = Some("{broken".to_string());
        assert_eq!(sut.get_current_account(), Err(DomainError::Unexpected));
    }

    #[test]
    fn test_round_trip_and_clear() {
        let sut = CurrentAccountAdapter::new(
            Arc::new(MemoryStorage::new()),
            AccountIntegrity::TokenAndName,
        );
        let account = AccountModel::new("any_token", "Any Name");

        sut.set_current_account(Some(&account)).unwrap();
        assert_eq!(sut.get_current_account(), Ok(Some(account)));

        sut.clear_current_account().unwrap();
        assert_eq!(sut.get_current_account(), Ok(None));
    }
}
