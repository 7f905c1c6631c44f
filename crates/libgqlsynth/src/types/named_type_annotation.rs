/// A reference to a named type, e.g. `User` or `String!`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}

impl NamedTypeAnnotation {
    pub fn new(type_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            nullable,
            type_name: type_name.into(),
        }
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
