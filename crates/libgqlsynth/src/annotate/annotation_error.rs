use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnnotationError {
    #[error("Failed to parse the query document: {0}")]
    QuerySyntaxError(String),
}
