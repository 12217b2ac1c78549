//! 账户文件存储
//!
//! 账户以 JSON 数组的形式保存在单个文件中。加载时对缺失或损坏的
//! 文件保持容忍，写回时总是序列化完整的当前列表。

use super::account::Account;
use crate::error::{Result, ValidationError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 内存中的账户列表及其持久化位置
#[derive(Debug)]
pub struct AccountStore {
    path: PathBuf,
    accounts: Vec<Account>,
    dirty: bool,
}

impl AccountStore {
    /// 加载账户文件
    ///
    /// 文件不存在时创建内容为 `[]` 的新文件；内容无法解析时记录警告并以空列表启动。
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, "[]\n")?;
            info!("Created empty account file at {}", path.display());
            return Ok(Self::empty(path));
        }

        let content = fs::read_to_string(&path)?;
        let accounts = match serde_json::from_str::<Vec<Account>>(&content) {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!(
                    "Account file {} could not be parsed, starting with no accounts: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        };

        debug!("Loaded {} account(s) from {}", accounts.len(), path.display());
        Ok(Self {
            path,
            accounts,
            dirty: false,
        })
    }

    /// 不触碰文件系统的空存储
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            accounts: Vec::new(),
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// 是否有尚未写回的修改
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// 按名称、id 或别名查找
    pub fn find(&self, query: &str) -> Option<(usize, &Account)> {
        self.accounts
            .iter()
            .enumerate()
            .find(|(_, account)| account.matches(query))
    }

    /// 按 id 精确查找
    pub fn find_by_id(&self, id: &str) -> Option<(usize, &Account)> {
        self.accounts
            .iter()
            .enumerate()
            .find(|(_, account)| account.id == id)
    }

    /// 追加账户，返回其下标
    pub fn add(&mut self, account: Account) -> std::result::Result<usize, ValidationError> {
        account.validate()?;

        if self.accounts.iter().any(|existing| existing.id == account.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: account.id,
            });
        }

        info!("Adding account '{}' ({})", account.name, account.id);
        self.accounts.push(account);
        self.dirty = true;
        Ok(self.accounts.len() - 1)
    }

    /// 删除指定下标的账户
    pub fn remove(&mut self, index: usize) -> std::result::Result<Account, ValidationError> {
        if index >= self.accounts.len() {
            return Err(ValidationError::NotFound { index });
        }

        let account = self.accounts.remove(index);
        info!("Removed account '{}' ({})", account.name, account.id);
        self.dirty = true;
        Ok(account)
    }

    /// 替换别名，空列表表示清除
    pub fn set_aliases(
        &mut self,
        index: usize,
        aliases: Vec<String>,
    ) -> std::result::Result<(), ValidationError> {
        let account = self
            .accounts
            .get_mut(index)
            .ok_or(ValidationError::NotFound { index })?;

        account.aliases = (!aliases.is_empty()).then_some(aliases);
        self.dirty = true;
        Ok(())
    }

    /// 将完整的账户列表写回文件
    pub fn flush(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.accounts)?;
        fs::write(&self.path, json + "\n")?;
        self.dirty = false;
        debug!(
            "Flushed {} account(s) to {}",
            self.accounts.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Account {
        Account::new("main", "1001", "AAAA.BBBB.CCCC")
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("accounts.json");

        let store = AccountStore::load(&path).unwrap();
        assert!(store.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn test_malformed_file_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.json");
        fs::write(&path, "{ not json").unwrap();

        let store = AccountStore::load(&path).unwrap();
        assert!(store.is_empty());
        // left untouched until the next flush
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_flush_then_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.json");

        let mut store = AccountStore::load(&path).unwrap();
        store.add(sample()).unwrap();
        store
            .add(Account::new("alt", "1002", "x.y.z").with_aliases(vec!["second".to_string()]))
            .unwrap();
        assert!(store.is_dirty());
        store.flush().unwrap();
        assert!(!store.is_dirty());

        let reloaded = AccountStore::load(&path).unwrap();
        assert_eq!(reloaded.accounts(), store.accounts());

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.matches("aliases").count(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = AccountStore::empty("unused.json");
        store.add(sample()).unwrap();

        let err = store.add(Account::new("other", "1001", "t")).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_and_find() {
        let mut store = AccountStore::empty("unused.json");
        store.add(sample()).unwrap();
        store.add(Account::new("alt", "1002", "t")).unwrap();

        assert_eq!(store.find("ALT").map(|(i, _)| i), Some(1));
        assert_eq!(store.find_by_id("1002").map(|(i, _)| i), Some(1));
        assert!(store.find_by_id("alt").is_none());
        assert!(store.find("ghost").is_none());

        let removed = store.remove(0).unwrap();
        assert_eq!(removed.name, "main");
        assert_eq!(store.find("alt").map(|(i, _)| i), Some(0));
        assert_eq!(
            store.remove(5),
            Err(ValidationError::NotFound { index: 5 })
        );
    }

    #[test]
    fn test_set_aliases() {
        let mut store = AccountStore::empty("unused.json");
        store.add(sample()).unwrap();

        store
            .set_aliases(0, vec!["primary".to_string(), "p".to_string()])
            .unwrap();
        assert!(store.find("p").is_some());

        store.set_aliases(0, Vec::new()).unwrap();
        assert_eq!(store.get(0).and_then(|a| a.aliases.clone()), None);
    }
}
