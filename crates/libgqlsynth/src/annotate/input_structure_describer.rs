use crate::annotate::InputAnnotation;
use crate::schema::SchemaDocument;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use std::collections::HashSet;

/// Describe the structure of the input type `annot` found at `path` as a
/// list of `@input` annotations.
///
/// Input objects list each of their fields and descend into fields that are
/// themselves input objects or lists. Each descent counts one level, and so
/// does every non-null wrapper; past
/// `max_depth` levels a subtree renders as a single truncated node. An input
/// type that is already being expanded further up renders as
/// `(recursive Name)` instead of being expanded again.
pub fn describe_input_type(
    schema: &SchemaDocument,
    path: &str,
    annot: &TypeAnnotation,
    max_depth: usize,
) -> Vec<InputAnnotation> {
    let mut describer = InputStructureDescriber {
        annotations: vec![],
        max_depth,
        schema,
        visiting: HashSet::new(),
    };
    describer.describe(path, annot, 0, true);
    describer.annotations
}

struct InputStructureDescriber<'a> {
    annotations: Vec<InputAnnotation>,
    max_depth: usize,
    schema: &'a SchemaDocument,
    visiting: HashSet<String>,
}
impl InputStructureDescriber<'_> {
    /// `emit_node` is false when the caller already emitted the line for
    /// `path` itself and only its children are wanted.
    fn describe(&mut self, path: &str, annot: &TypeAnnotation, depth: usize, emit_node: bool) {
        if depth > self.max_depth {
            self.push_truncated(path);
            return;
        }

        // A non-null wrapper is a level of its own.
        let depth =
            if annot.nullable() {
                depth
            } else if depth + 1 > self.max_depth {
                if emit_node {
                    self.push(path, annot, None);
                }
                self.push_truncated(path);
                return;
            } else {
                depth + 1
            };

        let named = match annot {
            TypeAnnotation::List(list) => {
                if emit_node {
                    self.push(path, annot, None);
                }
                let item_path = format!("{path}[]");
                self.describe(&item_path, list.inner_type_annotation(), depth + 1, true);
                return;
            },
            TypeAnnotation::Named(named) => named,
        };

        let type_name = named.graphql_type_name();
        match self.schema.type_kind(type_name) {
            Some(GraphQLTypeKind::Enum) => if emit_node {
                let values = self.schema.enum_values(type_name)
                    .unwrap_or_default()
                    .iter()
                    .map(|value| value.name.as_str())
                    .collect::<Vec<_>>()
                    .join("|");
                self.push(path, annot, Some(format!("enum: {values}")));
            },

            Some(GraphQLTypeKind::InputObject) => {
                if self.visiting.contains(type_name) {
                    self.push(path, annot, Some(format!("(recursive {type_name})")));
                    return;
                }
                self.visiting.insert(type_name.to_string());

                if emit_node {
                    let description = self.schema.description_of(type_name).map(str::to_string);
                    self.push(path, annot, description);
                }
                let schema = self.schema;
                for field in schema.input_fields(type_name).unwrap_or_default() {
                    let field_path = format!("{path}.{}", field.name);
                    let field_type = TypeAnnotation::from_ast_type(&field.value_type);
                    self.push(&field_path, &field_type, field.description.to_owned());

                    let expands =
                        field_type.as_list_annotation().is_some()
                            || schema.type_kind(field_type.innermost_type_name())
                                == Some(GraphQLTypeKind::InputObject);
                    if expands {
                        self.describe(&field_path, &field_type, depth + 1, false);
                    }
                }

                self.visiting.remove(type_name);
            },

            _ => if emit_node {
                self.push(path, annot, None);
            },
        }
    }

    fn push_truncated(&mut self, path: &str) {
        self.annotations.push(InputAnnotation {
            description: Some("(truncated)".to_string()),
            path: path.to_string(),
            type_label: "...".to_string(),
        });
    }

    fn push(&mut self, path: &str, annot: &TypeAnnotation, description: Option<String>) {
        let description = description
            .map(|desc| desc.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|desc| !desc.is_empty());
        self.annotations.push(InputAnnotation {
            description,
            path: path.to_string(),
            type_label: annot.to_string(),
        });
    }
}
