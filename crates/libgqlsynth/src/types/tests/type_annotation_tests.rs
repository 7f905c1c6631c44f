use crate::ast;
use crate::types::GraphQLTypeKind;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;

fn field_type(sdl_field: &str) -> ast::schema::Type {
    let doc = ast::schema::parse(&format!("type T {{ f: {sdl_field} }}"))
        .expect("fixture parses");
    match doc.definitions.into_iter().next() {
        Some(ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(obj),
        )) => obj.fields.into_iter().next().expect("one field").field_type,
        other => panic!("unexpected definition: {other:?}"),
    }
}

#[test]
fn display_round_trips_sdl_type_syntax() {
    for sdl in ["Int", "Int!", "[Int]", "[Int!]", "[Int!]!", "[[ID!]]!"] {
        let annot = TypeAnnotation::from_ast_type(&field_type(sdl));
        assert_eq!(annot.to_string(), sdl);
    }
}

#[test]
fn non_null_is_tracked_per_level() {
    let annot = TypeAnnotation::from_ast_type(&field_type("[Post!]"));

    assert!(annot.nullable());
    let list = annot.as_list_annotation().expect("is a list");
    assert!(!list.inner_type_annotation().nullable());
    assert_eq!(annot.innermost_type_name(), "Post");
}

#[test]
fn innermost_named_type_of_named_is_itself() {
    let annot: TypeAnnotation = NamedTypeAnnotation::new("User", false).into();

    assert_eq!(
        annot.innermost_named_type_annotation(),
        &NamedTypeAnnotation::new("User", false),
    );
    assert!(annot.as_list_annotation().is_none());
}

#[test]
fn nested_list_annotation_displays_each_level() {
    let annot: TypeAnnotation = ListTypeAnnotation::new(
        ListTypeAnnotation::new(NamedTypeAnnotation::new("ID", false).into(), true).into(),
        false,
    ).into();

    assert_eq!(annot.to_string(), "[[ID!]]!");
}

#[test]
fn builtin_scalar_kinds() {
    assert_eq!(GraphQLTypeKind::builtin_scalar("ID"), Some(GraphQLTypeKind::ID));
    assert_eq!(GraphQLTypeKind::builtin_scalar("Boolean"), Some(GraphQLTypeKind::Bool));
    assert_eq!(GraphQLTypeKind::builtin_scalar("UUID"), None);
    assert!(GraphQLTypeKind::Union.is_composite());
    assert!(GraphQLTypeKind::InputObject.is_input());
    assert!(!GraphQLTypeKind::InputObject.is_leaf());
    assert!(GraphQLTypeKind::Enum.is_leaf());
}

#[test]
fn only_builtin_scalars_have_builtin_descriptions() {
    for name in ["Boolean", "Float", "ID", "Int", "String"] {
        let kind = GraphQLTypeKind::builtin_scalar(name).unwrap();
        let description = kind.builtin_description().unwrap();
        assert!(description.starts_with(&format!("The `{name}` scalar type represents")));
    }
    assert_eq!(GraphQLTypeKind::Scalar.builtin_description(), None);
    assert_eq!(GraphQLTypeKind::Object.builtin_description(), None);
}
