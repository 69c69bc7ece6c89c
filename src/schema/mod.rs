pub mod source_type;
pub use source_type::*;

pub mod column_descriptor;
pub use column_descriptor::*;

pub mod table_descriptor;
pub use table_descriptor::*;
