pub mod column_type;
pub use column_type::*;

pub mod column_metadata;
pub use column_metadata::*;

pub mod translator;
pub use translator::*;
