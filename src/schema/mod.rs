pub mod allwise;
pub mod layout;
pub mod types;
pub mod write;

pub use layout::{CatalogSchema, SchemaBuilder};
pub use types::{ColumnSpec, Format};
pub use write::{dump_schema, write_atomic, DumpFormat};
