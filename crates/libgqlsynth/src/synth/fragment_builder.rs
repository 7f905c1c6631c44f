use crate::graph::has_required_arguments;
use crate::schema::SchemaDocument;
use crate::synth::Fragment;
use crate::synth::FragmentDepth;
use crate::synth::FragmentSelection;
use crate::synth::QuerySynthesisError;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use std::collections::BTreeSet;

type Result<T> = std::result::Result<T, QuerySynthesisError>;

/// Build the `{type_name}MediumFragment`: every leaf-valued field declared on
/// `type_name`, in declaration order.
pub fn medium_fragment(
    schema: &SchemaDocument,
    type_name: &str,
    disabled_fields: &BTreeSet<String>,
) -> Result<Fragment> {
    build_fragment(schema, type_name, disabled_fields, FragmentDepth::Medium)
}

/// Build the `{type_name}LargeFragment`: the Medium fragment's fields plus
/// every relation field, each reduced to `{ __typename id }`, in
/// declaration order.
pub fn large_fragment(
    schema: &SchemaDocument,
    type_name: &str,
    disabled_fields: &BTreeSet<String>,
) -> Result<Fragment> {
    build_fragment(schema, type_name, disabled_fields, FragmentDepth::Large)
}

fn build_fragment(
    schema: &SchemaDocument,
    type_name: &str,
    disabled_fields: &BTreeSet<String>,
    depth: FragmentDepth,
) -> Result<Fragment> {
    let kind = schema.type_kind(type_name)
        .ok_or_else(|| QuerySynthesisError::TypeNotFound {
            type_name: type_name.to_string(),
        })?;
    if !kind.is_composite() {
        return Err(QuerySynthesisError::NotAnOutputType {
            kind,
            type_name: type_name.to_string(),
        });
    }

    let mut selections = vec![];
    for field in schema.fields_of(type_name).unwrap_or_default() {
        // Fragments pass no field arguments.
        if disabled_fields.contains(&field.name) || has_required_arguments(field) {
            continue;
        }

        let field_type = TypeAnnotation::from_ast_type(&field.field_type);
        let target_type = field_type.innermost_type_name();
        let target_kind = schema.type_kind(target_type);
        let is_relation = target_kind.is_some_and(|kind| kind.is_composite());

        match (is_relation, depth) {
            (false, _) =>
                selections.push(FragmentSelection::Leaf(field.name.to_owned())),
            (true, FragmentDepth::Large) =>
                selections.push(FragmentSelection::Relation {
                    field_name: field.name.to_owned(),
                    sub_selection: relation_sub_selection(schema, target_type, target_kind),
                }),
            (true, FragmentDepth::Medium) => (),
        }
    }

    if selections.is_empty() {
        selections.push(FragmentSelection::Leaf("__typename".to_string()));
    }

    Ok(Fragment {
        depth,
        selections,
        type_name: type_name.to_string(),
    })
}

fn relation_sub_selection(
    schema: &SchemaDocument,
    target_type: &str,
    target_kind: Option<GraphQLTypeKind>,
) -> Vec<String> {
    let mut sub_selection = vec!["__typename".to_string()];
    let selects_id =
        target_kind != Some(GraphQLTypeKind::Union)
            && schema.field_definition(target_type, "id").is_some();
    if selects_id {
        sub_selection.push("id".to_string());
    }
    sub_selection
}
