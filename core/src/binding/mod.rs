//! Generic query-string binder: flat key/value parameters onto typed record fields.

pub mod binder;
pub mod parser;

pub use binder::bind_fields;
pub use parser::parse_query_string;
