use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{InternalTableShare, TableShare};

static GLOBAL_REGISTRY: Lazy<ShareRegistry> = Lazy::new(ShareRegistry::new);

/// Process-wide map of table name to its shared handle.
///
/// The map has its own lock, distinct from each share's mutex, so creation
/// and destruction of entries cannot race. Lock order is always registry
/// first, then share. A poisoned lock means another thread panicked while
/// mutating shared state; that is fatal here, matching how the rest of the
/// crate treats lock acquisition.
#[derive(Debug, Default)]
pub struct ShareRegistry {
    shares: Mutex<HashMap<String, TableShare>>,
}

impl ShareRegistry {
    pub fn new() -> Self {
        Self { shares: Mutex::new(HashMap::new()) }
    }

    /// The registry instance shared by the whole storage-engine plugin.
    pub fn global() -> &'static ShareRegistry {
        &GLOBAL_REGISTRY
    }

    /// Return the share for `name`, creating it on first use.
    ///
    /// An existing share has its use count bumped under its own lock; a new
    /// one starts at 1 and is inserted before the registry lock is dropped.
    pub fn acquire(&self, name: &str, alias: &str, path: &Path) -> TableShare {
        let mut shares = self.shares.lock().unwrap();

        if let Some(share) = shares.get(name) {
            share.lock().unwrap().use_count += 1;
            return share.clone();
        }

        debug!(table = name, "creating table share");
        let share = InternalTableShare::new(name, alias, path.to_path_buf()).into_protected();
        shares.insert(name.to_string(), share.clone());
        share
    }

    /// Drop one reference to `share`; returns true when this was the last
    /// one and the share was removed from the registry.
    pub fn release(&self, share: &TableShare) -> bool {
        let mut shares = self.shares.lock().unwrap();

        let name = {
            let mut guard = share.lock().unwrap();
            guard.use_count -= 1;
            if guard.use_count > 0 {
                return false;
            }
            guard.name.clone()
        };

        debug!(table = %name, "destroying table share");
        shares.remove(&name);
        true
    }

    pub fn len(&self) -> usize {
        self.shares.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn acquire_creates_then_reuses_one_share() {
        let registry = ShareRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders");

        let first = registry.acquire("orders", "orders", &path);
        let second = registry.acquire("orders", "orders", &path);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.lock().unwrap().use_count(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn distinct_tables_get_distinct_shares() {
        let registry = ShareRegistry::new();
        let dir = tempfile::tempdir().unwrap();

        let orders = registry.acquire("orders", "orders", &dir.path().join("orders"));
        let users = registry.acquire("users", "users", &dir.path().join("users"));

        assert!(!Arc::ptr_eq(&orders, &users));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn release_destroys_only_at_zero() {
        let registry = ShareRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders");

        let first = registry.acquire("orders", "orders", &path);
        let second = registry.acquire("orders", "orders", &path);

        assert!(!registry.release(&first));
        assert_eq!(registry.len(), 1);
        assert!(registry.release(&second));
        assert!(registry.is_empty());
    }

    #[test]
    fn mutations_happen_under_the_share_lock() {
        let registry = ShareRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        let share = registry.acquire("orders", "orders", &dir.path().join("orders"));

        {
            let mut guard = share.lock().unwrap();
            guard.crashed = true;
            guard.rows_recorded = 42;
        }

        let guard = share.lock().unwrap();
        assert!(guard.crashed);
        assert_eq!(guard.rows_recorded, 42);
    }

    #[test]
    fn concurrent_acquires_build_exactly_one_share() {
        const THREADS: usize = 16;

        let registry = Arc::new(ShareRegistry::new());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders");

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let path = path.clone();
                thread::spawn(move || registry.acquire("orders", "orders", &path))
            })
            .collect();

        let shares: Vec<TableShare> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(registry.len(), 1);
        assert!(shares.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
        assert_eq!(shares[0].lock().unwrap().use_count(), THREADS);

        let destroyed: usize = shares
            .iter()
            .map(|share| registry.release(share) as usize)
            .sum();
        assert_eq!(destroyed, 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn global_registry_is_a_single_instance() {
        assert!(std::ptr::eq(ShareRegistry::global(), ShareRegistry::global()));
    }
}
