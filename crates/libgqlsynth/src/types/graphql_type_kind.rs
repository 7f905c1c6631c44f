use crate::ast;

/// The category of a named type as declared in (or built into) a schema.
///
/// The five built-in scalars get their own variants so callers can tell them
/// apart from custom `scalar` declarations without a schema lookup.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    /// Look up one of the built-in scalar types by name.
    pub fn builtin_scalar(type_name: &str) -> Option<Self> {
        match type_name {
            "Boolean" => Some(Self::Bool),
            "Float" => Some(Self::Float),
            "ID" => Some(Self::ID),
            "Int" => Some(Self::Int),
            "String" => Some(Self::String),
            _ => None,
        }
    }

    /// The description the GraphQL type system gives each built-in scalar.
    /// `None` for every other kind.
    pub fn builtin_description(&self) -> Option<&'static str> {
        match self {
            Self::Bool => Some("The `Boolean` scalar type represents `true` or `false`."),
            Self::Float => Some(
                "The `Float` scalar type represents signed double-precision \
                fractional values as specified by \
                [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point)."
            ),
            Self::ID => Some(
                "The `ID` scalar type represents a unique identifier, often used \
                to refetch an object or as key for a cache. The ID type appears \
                in a JSON response as a String; however, it is not intended to be \
                human-readable. When expected as an input type, any string (such \
                as `\"4\"`) or integer (such as `4`) input value will be accepted \
                as an ID."
            ),
            Self::Int => Some(
                "The `Int` scalar type represents non-fractional signed whole \
                numeric values. Int can represent values between -(2^31) and \
                2^31 - 1."
            ),
            Self::String => Some(
                "The `String` scalar type represents textual data, represented as \
                UTF-8 character sequences. The String type is most often used by \
                GraphQL to represent free-form human-readable text."
            ),
            Self::Enum
                | Self::InputObject
                | Self::Interface
                | Self::Object
                | Self::Scalar
                | Self::Union => None,
        }
    }

    /// Object, Interface and Union types must be selected with a nested
    /// selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    /// Types that may appear in argument and variable positions.
    pub fn is_input(&self) -> bool {
        !self.is_composite()
    }

    /// Leaf types: built-in scalars, custom scalars and enums.
    pub fn is_leaf(&self) -> bool {
        !self.is_composite() && *self != Self::InputObject
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum => "Enum",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject => "InputObject",
            Self::Int => "Int",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::String => "String",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&ast::schema::TypeDefinition> for GraphQLTypeKind {
    fn from(value: &ast::schema::TypeDefinition) -> Self {
        use ast::schema::TypeDefinition;
        match value {
            TypeDefinition::Enum(_) => Self::Enum,
            TypeDefinition::InputObject(_) => Self::InputObject,
            TypeDefinition::Interface(_) => Self::Interface,
            TypeDefinition::Object(_) => Self::Object,
            TypeDefinition::Scalar(scalar) =>
                Self::builtin_scalar(scalar.name.as_str()).unwrap_or(Self::Scalar),
            TypeDefinition::Union(_) => Self::Union,
        }
    }
}
