mod operation_kind;
mod root_operation_index;
#[allow(clippy::module_inception)]
mod schema_document;

pub use operation_kind::OperationKind;
pub use root_operation_index::RootFieldShape;
pub use root_operation_index::RootOperationIndex;
pub use schema_document::SchemaDocument;
pub use schema_document::SchemaParseError;
pub(crate) use schema_document::type_definition_name;

#[cfg(test)]
mod tests;
