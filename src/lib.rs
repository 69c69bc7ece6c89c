pub mod schema;
pub use schema::{ColumnDescriptor, KeyDefinition, KeyPart, SourceType, TableDescriptor};

pub mod metadata;
pub use metadata::{translate, ColumnMetadata, ColumnType};

pub mod share;
pub use share::{InternalTableShare, ShareRegistry, TableShare};

pub mod config;
pub use config::{AdapterConfig, AdapterError};
