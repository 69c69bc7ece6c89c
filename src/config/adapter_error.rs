use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The named adapter has no configuration section.
    UnknownAdapter(String),
    /// The backend has no store for the requested table.
    StoreNotFound(String),
}

impl Display for AdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterError::UnknownAdapter(name) => {
                write!(f, "adapter '{name}' is not configured")
            }
            AdapterError::StoreNotFound(table) => {
                write!(f, "no store found for table '{table}'")
            }
        }
    }
}

impl std::error::Error for AdapterError {}
