mod annotated_query;
mod annotation_error;
mod annotator_config;
mod field_description_index;
mod input_structure_describer;
mod output_field_resolver;
mod query_annotator;
mod query_context;
mod variable_type_resolver;

pub use annotated_query::AnnotatedQuery;
pub use annotated_query::InputAnnotation;
pub use annotated_query::PropertyAnnotation;
pub use annotated_query::VariableAnnotation;
pub use annotation_error::AnnotationError;
pub use annotator_config::AnnotatorConfig;
pub use field_description_index::FieldDescriptionIndex;
pub use input_structure_describer::describe_input_type;
pub use output_field_resolver::resolve_output_fields;
pub use query_annotator::QueryAnnotator;
pub use query_annotator::annotate;
pub use query_context::OperationParts;
pub use query_context::QueryContext;
pub use variable_type_resolver::resolve_variable_types;

#[cfg(test)]
mod tests;
