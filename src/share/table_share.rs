use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Thread-safe handle to the per-table share, protected by a Mutex.
///
/// All open handles for the same physical table hold clones of one
/// `TableShare`; every mutation of the inner fields happens under the lock.
pub type TableShare = Arc<Mutex<InternalTableShare>>;

/// State shared by every open handle of one physical backend table.
///
/// The registry creates one of these on the first acquire and drops it when
/// `use_count` returns to zero. `crashed` and `rows_recorded` are scratch
/// state for the enclosing storage-engine handler.
#[derive(Debug)]
pub struct InternalTableShare {
    pub name: String,
    pub alias: String,
    /// Filesystem/storage path of the table
    pub path: PathBuf,
    /// Set when the table's backing state is known to be inconsistent
    pub crashed: bool,
    /// Row-count estimate maintained by the handler
    pub rows_recorded: u64,
    pub(crate) use_count: usize,
}

impl InternalTableShare {
    pub fn new(name: &str, alias: &str, path: PathBuf) -> Self {
        Self {
            name: name.to_string(),
            alias: alias.to_string(),
            path,
            crashed: false,
            rows_recorded: 0,
            use_count: 1,
        }
    }

    pub fn into_protected(self) -> TableShare {
        Arc::new(Mutex::new(self))
    }

    pub fn use_count(&self) -> usize {
        self.use_count
    }
}
