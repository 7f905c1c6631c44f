use crate::annotate::QueryContext;
use crate::annotate::query_context::narrowed_type;
use crate::ast;
use crate::schema::SchemaDocument;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Map every variable used as (or inside) a field argument to the input type
/// the schema declares at the position where it is used.
///
/// Object literals are walked field by field against their input object
/// type and list literals element by element against the list's item type,
/// so `where: { name: $name }` attributes `$name` the type of the `name`
/// input field rather than the type of `where`. A variable used in several
/// positions keeps the type of the last one visited. Variables that are
/// declared but never used in an attributable position are absent.
pub fn resolve_variable_types(
    schema: &SchemaDocument,
    context: &QueryContext<'_>,
) -> IndexMap<String, TypeAnnotation> {
    let mut resolver = VariableTypeResolver {
        context,
        expanding_fragments: HashSet::new(),
        resolved: IndexMap::new(),
        schema,
    };
    for op in context.operations() {
        if let Some(root_type) = schema.root_type_name(op.kind) {
            resolver.walk_selection_set(op.selection_set, root_type);
        }
    }
    resolver.resolved
}

struct VariableTypeResolver<'a, 'doc> {
    context: &'a QueryContext<'doc>,
    expanding_fragments: HashSet<&'doc str>,
    resolved: IndexMap<String, TypeAnnotation>,
    schema: &'a SchemaDocument,
}
impl<'a, 'doc> VariableTypeResolver<'a, 'doc> {
    fn walk_selection_set(
        &mut self,
        selection_set: &'doc ast::operation::SelectionSet,
        parent_type: &str,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::operation::Selection::Field(field) =>
                    self.walk_field(field, parent_type),

                ast::operation::Selection::FragmentSpread(spread) => {
                    let name = spread.fragment_name.as_str();
                    let Some(frag) = self.context.fragment(name) else { continue };
                    if !self.expanding_fragments.insert(frag.name.as_str()) {
                        continue;
                    }
                    let frag_type = narrowed_type(
                        self.schema,
                        Some(&frag.type_condition),
                        parent_type,
                    ).to_string();
                    self.walk_selection_set(&frag.selection_set, frag_type.as_str());
                    self.expanding_fragments.remove(frag.name.as_str());
                },

                ast::operation::Selection::InlineFragment(inline) => {
                    let frag_type = narrowed_type(
                        self.schema,
                        inline.type_condition.as_ref(),
                        parent_type,
                    ).to_string();
                    self.walk_selection_set(&inline.selection_set, frag_type.as_str());
                },
            }
        }
    }

    fn walk_field(&mut self, field: &'doc ast::operation::Field, parent_type: &str) {
        let schema = self.schema;
        let Some(field_def) = schema.field_definition(parent_type, &field.name) else {
            return;
        };

        for (arg_name, value) in &field.arguments {
            let arg_def = field_def.arguments.iter().find(|arg| &arg.name == arg_name);
            if let Some(arg_def) = arg_def {
                let expected = TypeAnnotation::from_ast_type(&arg_def.value_type);
                self.walk_value(value, &expected);
            }
        }

        if !field.selection_set.items.is_empty() {
            let field_type = TypeAnnotation::from_ast_type(&field_def.field_type);
            let child_type = field_type.innermost_type_name().to_string();
            self.walk_selection_set(&field.selection_set, child_type.as_str());
        }
    }

    fn walk_value(&mut self, value: &ast::operation::Value, expected: &TypeAnnotation) {
        match value {
            ast::operation::Value::Variable(var_name) => {
                self.resolved.insert(var_name.to_owned(), expected.to_owned());
            },

            ast::operation::Value::Object(object_fields) => {
                let schema = self.schema;
                let input_type = expected.innermost_type_name();
                if schema.type_kind(input_type) != Some(GraphQLTypeKind::InputObject) {
                    return;
                }
                let input_fields = schema.input_fields(input_type).unwrap_or_default();
                for (field_name, field_value) in object_fields {
                    let input_field = input_fields.iter().find(|f| &f.name == field_name);
                    if let Some(input_field) = input_field {
                        let field_type = TypeAnnotation::from_ast_type(&input_field.value_type);
                        self.walk_value(field_value, &field_type);
                    }
                }
            },

            ast::operation::Value::List(items) => {
                if let Some(list_type) = expected.as_list_annotation() {
                    for item in items {
                        self.walk_value(item, list_type.inner_type_annotation());
                    }
                }
            },

            _ => (),
        }
    }
}
