pub mod aggregate;
pub mod datetime;
pub mod record;
pub mod recordset;
pub mod summary;
pub mod timeline;
pub mod tokenizer;

mod error;
pub use error::{DropReason, ParseError, SchemaError};

pub use recordset::{Fight, RecordSet};
