//! Schema-driven GraphQL query synthesis and annotation.
//!
//! [`synth::QuerySynthesizer`] builds complete query documents (operation
//! header, variable declarations, nested selections and fragments) from a
//! [`schema::SchemaDocument`] and an ordered list of type names.
//! [`annotate::QueryAnnotator`] documents any query against the same schema
//! with a `#`-commented `@param`/`@input`/`@property` header.

pub mod annotate;
pub mod ast;
pub(crate) mod file_reader;
pub mod graph;
pub mod schema;
pub mod synth;
pub mod types;

pub use file_reader::ReadContentError;

#[cfg(test)]
mod test;
