mod graphql_type_kind;
mod list_type_annotation;
mod named_type_annotation;
mod type_annotation;

pub use graphql_type_kind::GraphQLTypeKind;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;

#[cfg(test)]
mod tests;
