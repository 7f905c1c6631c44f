use crate::annotate::FieldDescriptionIndex;
use crate::annotate::PropertyAnnotation;
use crate::annotate::QueryContext;
use crate::annotate::query_context::narrowed_type;
use crate::ast;
use crate::schema::SchemaDocument;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use std::collections::HashSet;

/// Resolve every selected output field reachable from each operation's root
/// type to its schema-declared named type and description.
///
/// Paths are dotted response keys (aliases win over field names). Fragment
/// spreads and inline fragments narrow the current type to their type
/// condition without adding a path segment. Selections directly under a
/// Union type are skipped, as are fields the schema does not declare
/// (`__typename` included). Each `(path, type)` pair is reported once, in
/// the order first reached.
pub fn resolve_output_fields(
    schema: &SchemaDocument,
    descriptions: &FieldDescriptionIndex,
    context: &QueryContext<'_>,
) -> Vec<PropertyAnnotation> {
    let mut resolver = OutputFieldResolver {
        context,
        descriptions,
        expanding_fragments: HashSet::new(),
        properties: vec![],
        schema,
        seen: HashSet::new(),
    };
    for op in context.operations() {
        if let Some(root_type) = schema.root_type_name(op.kind) {
            resolver.walk_selection_set(op.selection_set, root_type, "");
        }
    }
    resolver.properties
}

struct OutputFieldResolver<'a, 'doc> {
    context: &'a QueryContext<'doc>,
    descriptions: &'a FieldDescriptionIndex,
    expanding_fragments: HashSet<&'doc str>,
    properties: Vec<PropertyAnnotation>,
    schema: &'a SchemaDocument,
    seen: HashSet<(String, String)>,
}
impl<'a, 'doc> OutputFieldResolver<'a, 'doc> {
    fn walk_selection_set(
        &mut self,
        selection_set: &'doc ast::operation::SelectionSet,
        parent_type: &str,
        prefix: &str,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::operation::Selection::Field(field) => {
                    if self.schema.type_kind(parent_type) == Some(GraphQLTypeKind::Union) {
                        continue;
                    }
                    self.walk_field(field, parent_type, prefix);
                },

                ast::operation::Selection::FragmentSpread(spread) => {
                    let name = spread.fragment_name.as_str();
                    let Some(frag) = self.context.fragment(name) else { continue };
                    if !self.expanding_fragments.insert(frag.name.as_str()) {
                        tracing::debug!("Not re-entering fragment `{name}` while expanding it.");
                        continue;
                    }
                    let frag_type = narrowed_type(
                        self.schema,
                        Some(&frag.type_condition),
                        parent_type,
                    ).to_string();
                    self.walk_selection_set(&frag.selection_set, frag_type.as_str(), prefix);
                    self.expanding_fragments.remove(frag.name.as_str());
                },

                ast::operation::Selection::InlineFragment(inline) => {
                    let frag_type = narrowed_type(
                        self.schema,
                        inline.type_condition.as_ref(),
                        parent_type,
                    ).to_string();
                    self.walk_selection_set(&inline.selection_set, frag_type.as_str(), prefix);
                },
            }
        }
    }

    fn walk_field(
        &mut self,
        field: &'doc ast::operation::Field,
        parent_type: &str,
        prefix: &str,
    ) {
        let schema = self.schema;
        let Some(field_def) = schema.field_definition(parent_type, &field.name) else {
            return;
        };
        let response_key = field.alias.as_ref().unwrap_or(&field.name);
        let path =
            if prefix.is_empty() {
                response_key.to_owned()
            } else {
                format!("{prefix}.{response_key}")
            };
        let field_type = TypeAnnotation::from_ast_type(&field_def.field_type);
        let type_name = field_type.innermost_type_name();

        if self.seen.insert((path.to_owned(), type_name.to_string())) {
            let description = self.descriptions
                .description(parent_type, &field.name)
                .map(|desc| desc.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|desc| !desc.is_empty());
            self.properties.push(PropertyAnnotation {
                description,
                path: path.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if !field.selection_set.items.is_empty() {
            self.walk_selection_set(&field.selection_set, type_name, path.as_str());
        }
    }
}
