use crate::ast;
use crate::graph::TypePath;
use crate::schema::SchemaDocument;
use crate::schema::type_definition_name;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeGraphBuildError>;

/// A single `(owner) -field-> (target)` relation in a [`TypeGraph`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeGraphEdge {
    pub(crate) field_name: String,
    pub(crate) target_type: String,
}
impl TypeGraphEdge {
    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn target_type(&self) -> &str {
        self.target_type.as_str()
    }
}

/// Directed graph of field references between named types.
///
/// Every Object, Interface and InputObject field that is not disabled
/// contributes one edge from its owner type to the named type at the bottom
/// of its List/NonNull wrappers. Each type's edges keep the field declaration
/// order of the SDL. Types without fields (or absent from the schema) simply
/// have no outgoing edges.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeGraph {
    disabled_fields: BTreeSet<String>,
    edges: IndexMap<String, Vec<TypeGraphEdge>>,
}
impl TypeGraph {
    pub fn build(
        schema: &SchemaDocument,
        disabled_fields: &BTreeSet<String>,
    ) -> Result<Self> {
        Self::build_impl(schema, disabled_fields, /* selectable_only = */ false)
    }

    /// Like [`TypeGraph::build`], but leaves out every Object and Interface
    /// field with a required argument, so each path in the graph can be
    /// rendered as a selection that passes no field arguments.
    pub fn build_selectable(
        schema: &SchemaDocument,
        disabled_fields: &BTreeSet<String>,
    ) -> Result<Self> {
        Self::build_impl(schema, disabled_fields, /* selectable_only = */ true)
    }

    fn build_impl(
        schema: &SchemaDocument,
        disabled_fields: &BTreeSet<String>,
        selectable_only: bool,
    ) -> Result<Self> {
        let mut edges = IndexMap::<String, Vec<TypeGraphEdge>>::new();

        for type_def in schema.type_definitions() {
            let owner_type = type_definition_name(type_def);
            let field_types: Vec<(&str, &ast::schema::Type)> = match type_def {
                ast::schema::TypeDefinition::Object(obj) =>
                    output_field_types(&obj.fields, selectable_only),
                ast::schema::TypeDefinition::Interface(iface) =>
                    output_field_types(&iface.fields, selectable_only),
                ast::schema::TypeDefinition::InputObject(input) =>
                    input.fields.iter()
                        .map(|f| (f.name.as_str(), &f.value_type))
                        .collect(),
                _ => continue,
            };

            let owner_edges = edges.entry(owner_type.to_string()).or_default();
            for (field_name, field_type) in field_types {
                if disabled_fields.contains(field_name) {
                    continue;
                }
                let target_type = unwrap_named_type(field_type).ok_or_else(||
                    TypeGraphBuildError::UnexpectedTypeNode {
                        field_name: field_name.to_string(),
                        owner_type: owner_type.to_string(),
                        type_node: format!("{field_type:?}"),
                    }
                )?;
                owner_edges.push(TypeGraphEdge {
                    field_name: field_name.to_string(),
                    target_type: target_type.to_string(),
                });
            }
        }

        tracing::debug!(
            "Built type graph with {} types and {} edges ({} disabled field names).",
            edges.len(),
            edges.values().map(Vec::len).sum::<usize>(),
            disabled_fields.len(),
        );

        Ok(Self {
            disabled_fields: disabled_fields.to_owned(),
            edges,
        })
    }

    /// Whether any edge in the graph is named `field_name`.
    pub fn contains_edge_field(&self, field_name: &str) -> bool {
        self.edges.values()
            .flatten()
            .any(|edge| edge.field_name == field_name)
    }

    pub fn disabled_fields(&self) -> &BTreeSet<String> {
        &self.disabled_fields
    }

    /// Outgoing edges of `type_name` in field declaration order.
    pub fn edges_from(&self, type_name: &str) -> &[TypeGraphEdge] {
        self.edges.get(type_name)
            .map(|edges| edges.as_slice())
            .unwrap_or_default()
    }

    /// Shortest path from `source` to `target`. See [`crate::graph::shortest_path`].
    pub fn shortest_path(&self, source: &str, target: &str) -> TypePath {
        crate::graph::shortest_path(self, source, target)
    }

    /// Names of every type that declares fields, in declaration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(|name| name.as_str())
    }
}

fn output_field_types(
    fields: &[ast::schema::Field],
    selectable_only: bool,
) -> Vec<(&str, &ast::schema::Type)> {
    fields.iter()
        .filter(|field| !(selectable_only && has_required_arguments(field)))
        .map(|field| (field.name.as_str(), &field.field_type))
        .collect()
}

/// Whether `field` declares a non-null argument without a default value,
/// i.e. one that every selection of the field must pass.
pub fn has_required_arguments(field: &ast::schema::Field) -> bool {
    field.arguments.iter().any(|arg|
        matches!(arg.value_type, ast::schema::Type::NonNullType(_))
            && arg.default_value.is_none()
    )
}

/// Strip List/NonNull wrappers off of `ast_type` and return the named type at
/// the bottom.
///
/// Returns `None` for shapes the SDL grammar cannot produce, i.e. a NonNull
/// wrapper directly around another NonNull wrapper.
pub fn unwrap_named_type(ast_type: &ast::schema::Type) -> Option<&str> {
    let mut current = ast_type;
    let mut inside_non_null = false;
    loop {
        match current {
            ast::schema::Type::NamedType(name) => return Some(name.as_str()),
            ast::schema::Type::ListType(inner) => {
                inside_non_null = false;
                current = inner;
            },
            ast::schema::Type::NonNullType(inner) => {
                if inside_non_null {
                    return None;
                }
                inside_non_null = true;
                current = inner;
            },
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeGraphBuildError {
    #[error(
        "The `{owner_type}.{field_name}` field has a type node that cannot be \
        unwrapped to a named type: {type_node}"
    )]
    UnexpectedTypeNode {
        field_name: String,
        owner_type: String,
        type_node: String,
    },
}
