//! 进程内共享的账户存储
//!
//! 菜单页面与 Ctrl+C 处理线程共用同一个 [`AccountStore`]，
//! 任何退出路径都会把内存中的账户写回文件。

use std::sync::{Arc, Mutex, MutexGuard};
use switchboard_common::AccountStore;
use tracing::{debug, error};

/// 可跨线程共享的账户存储句柄
#[derive(Debug, Clone)]
pub struct SharedStore(Arc<Mutex<AccountStore>>);

impl SharedStore {
    pub fn new(store: AccountStore) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }

    /// 锁定存储；持锁线程 panic 后仍可继续使用数据
    pub fn lock(&self) -> MutexGuard<'_, AccountStore> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 写回文件，失败只记录日志
    pub fn flush_quietly(&self) {
        let mut store = self.lock();
        match store.flush() {
            Ok(()) => debug!("Account store flushed to {}", store.path().display()),
            Err(e) => error!(
                "Failed to write accounts to {}: {}",
                store.path().display(),
                e
            ),
        }
    }
}

/// 作用域结束时写回账户文件
///
/// 覆盖正常返回、提前返回与 panic 展开三种路径。
pub struct StoreGuard {
    store: SharedStore,
}

impl StoreGuard {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Drop for StoreGuard {
    fn drop(&mut self) {
        self.store.flush_quietly();
    }
}
