use crate::graph::TypeGraphBuildError;
use crate::schema::RootFieldShape;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum QuerySynthesisError {
    #[error(
        "The `{type_name}` type is a {kind:?} type and cannot be selected \
        with a fragment."
    )]
    NotAnOutputType {
        kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "No {shape} root field on the Query type returns `{type_name}`."
    )]
    NoRootOperation {
        shape: RootFieldShape,
        type_name: String,
    },

    #[error("At least one type name must be requested.")]
    NoTypesRequested,

    #[error(
        "The `{target_type}` type cannot be reached from `{source_type}` (nor \
        from the root type) through any field relation."
    )]
    TargetUnreachable {
        source_type: String,
        target_type: String,
    },

    #[error(transparent)]
    TypeGraphBuildError(#[from] TypeGraphBuildError),

    #[error("The `{type_name}` type is not defined in the schema.")]
    TypeNotFound {
        type_name: String,
    },
}
