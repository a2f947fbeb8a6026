//! Input parsing, typed tables and data source handling.

mod infer;
mod parser;
mod source;
mod table;
mod value;

pub use infer::is_null_token;
pub use parser::{Parser, ParserConfig};
pub use source::{DataSource, SourceMetadata};
pub use table::DataTable;
pub use value::{Value, ValueKey};
