use crate::ast;

/// The three kinds of root operation a schema can define an entry type for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// The default root type name used when the schema has no explicit
    /// `schema { ... }` definition.
    pub(crate) fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::convert::From<&ast::operation::OperationDefinition> for OperationKind {
    fn from(value: &ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition;
        match value {
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Query(_)
                | OperationDefinition::SelectionSet(_) => Self::Query,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
