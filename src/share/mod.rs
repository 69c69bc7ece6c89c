pub mod table_share;
pub use table_share::*;

pub mod registry;
pub use registry::*;
