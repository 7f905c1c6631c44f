use crate::schema::OperationKind;
use crate::schema::SchemaDocument;
use crate::schema::SchemaParseError;
use crate::test::fixtures;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaParseError>;

mod parsing {
    use super::*;

    #[test]
    fn parse_preserves_declaration_order() -> Result<()> {
        let schema = SchemaDocument::parse(fixtures::USER_POST_SDL)?;

        let names = schema.type_definitions()
            .map(crate::schema::type_definition_name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["User", "Post", "Query"]);

        Ok(())
    }

    #[test]
    fn parse_invalid_syntax() {
        let result = SchemaDocument::parse("this is not valid syntax");

        assert!(matches!(
            result,
            Err(SchemaParseError::ParseError { ref file, .. })
                if file == &PathBuf::from("str://0"),
        ));
    }

    #[test]
    fn duplicate_type_definition_is_rejected() {
        let result = SchemaDocument::parse(concat!(
            "type Query { a: Int }\n",
            "type Query { b: Int }\n",
        ));

        assert!(matches!(
            result,
            Err(SchemaParseError::DuplicateTypeDefinition { ref type_name, .. })
                if type_name == "Query",
        ));
    }

    #[test]
    fn extension_fields_are_folded_into_base_type() -> Result<()> {
        let schema = SchemaDocument::parse(fixtures::UNIVERSITY_SDL)?;

        let field_names = schema.fields_of("EventGQLModel")
            .expect("EventGQLModel is an object type")
            .iter()
            .map(|field| field.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(field_names, vec!["id", "name", "startdate", "facility"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type_is_rejected() {
        let result = SchemaDocument::parse(concat!(
            "type Query { a: Int }\n",
            "extend type Missing { b: Int }\n",
        ));

        assert!(matches!(
            result,
            Err(SchemaParseError::ExtensionOfUndefinedType { ref type_name })
                if type_name == "Missing",
        ));
    }

    #[test]
    fn extension_with_mismatched_kind_is_rejected() {
        let result = SchemaDocument::parse(concat!(
            "type Query { a: Int }\n",
            "extend input Query { b: Int }\n",
        ));

        assert!(matches!(
            result,
            Err(SchemaParseError::ExtensionOfUndefinedType { .. }),
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = SchemaDocument::from_file("/definitely/not/here.graphql");

        assert!(matches!(result, Err(SchemaParseError::FileReadError(_))));
    }

    #[test]
    fn from_files_merges_sources() -> Result<()> {
        let dir = std::env::temp_dir().join(format!(
            "libgqlsynth-schema-document-{}",
            std::process::id(),
        ));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let types_path = dir.join("types.graphql");
        let query_path = dir.join("query.graphql");
        std::fs::write(&types_path, "type User { id: ID! }").expect("write");
        std::fs::write(
            &query_path,
            "type Query { userPage: [User] }\nextend type User { name: String }",
        ).expect("write");

        let schema = SchemaDocument::from_files(&[&types_path, &query_path])?;

        assert!(schema.field_definition("User", "name").is_some());
        assert!(schema.root_field_definition(OperationKind::Query, "userPage").is_some());

        std::fs::remove_dir_all(&dir).expect("cleanup");
        Ok(())
    }
}

mod lookups {
    use super::*;

    #[test]
    fn type_kinds_include_builtin_scalars() -> Result<()> {
        let schema = SchemaDocument::parse(fixtures::UNIVERSITY_SDL)?;

        assert_eq!(schema.type_kind("UserGQLModel"), Some(GraphQLTypeKind::Object));
        assert_eq!(schema.type_kind("Entity"), Some(GraphQLTypeKind::Interface));
        assert_eq!(schema.type_kind("SearchResult"), Some(GraphQLTypeKind::Union));
        assert_eq!(schema.type_kind("RoleKind"), Some(GraphQLTypeKind::Enum));
        assert_eq!(schema.type_kind("StrFilter"), Some(GraphQLTypeKind::InputObject));
        assert_eq!(schema.type_kind("UUID"), Some(GraphQLTypeKind::Scalar));
        assert_eq!(schema.type_kind("String"), Some(GraphQLTypeKind::String));
        assert_eq!(schema.type_kind("Nope"), None);
        assert!(schema.type_definition("String").is_none());

        Ok(())
    }

    #[test]
    fn descriptions_are_exposed() -> Result<()> {
        let schema = SchemaDocument::parse(fixtures::UNIVERSITY_SDL)?;

        assert_eq!(schema.description_of("UserGQLModel"), Some("A person in the university"));
        assert_eq!(schema.description_of("FacilityGQLModel"), None);
        assert_eq!(schema.description_of("UUID"), None);
        assert_eq!(
            schema.description_of("Boolean"),
            Some("The `Boolean` scalar type represents `true` or `false`."),
        );
        assert_eq!(
            schema.field_definition("UserGQLModel", "name")
                .and_then(|f| f.description.as_deref()),
            Some("Given name"),
        );

        Ok(())
    }

    #[test]
    fn sdl_description_wins_over_builtin_scalar_description() -> Result<()> {
        let schema = SchemaDocument::parse(r#"
            "Text, trimmed."
            scalar String
            type Query { name: String }
        "#)?;

        assert_eq!(schema.description_of("String"), Some("Text, trimmed."));
        assert!(schema.description_of("Int").is_some_and(|desc| desc.starts_with("The `Int` scalar")));

        Ok(())
    }

    #[test]
    fn input_fields_and_enum_values() -> Result<()> {
        let schema = SchemaDocument::parse(fixtures::UNIVERSITY_SDL)?;

        let input_names = schema.input_fields("UserInputWhereFilter")
            .expect("input object")
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(input_names, vec!["name", "role", "_and", "_or"]);

        let enum_names = schema.enum_values("RoleKind")
            .expect("enum")
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(enum_names, vec!["STUDENT", "TEACHER"]);

        assert!(schema.input_fields("UserGQLModel").is_none());
        assert!(schema.fields_of("StrFilter").is_none());

        Ok(())
    }

    #[test]
    fn default_root_type_names() -> Result<()> {
        let schema = SchemaDocument::parse(fixtures::USER_POST_SDL)?;

        assert_eq!(schema.root_type_name(OperationKind::Query), Some("Query"));
        assert_eq!(schema.root_type_name(OperationKind::Mutation), None);
        assert_eq!(schema.root_type_name(OperationKind::Subscription), None);

        let field = schema.root_field_definition(OperationKind::Query, "userPage")
            .expect("userPage root field");
        assert_eq!(field.arguments.len(), 2);
        assert!(schema.root_field_definition(OperationKind::Query, "postPage").is_none());
        assert!(schema.root_field_definition(OperationKind::Mutation, "userPage").is_none());

        Ok(())
    }

    #[test]
    fn explicit_schema_definition_overrides_root_names() -> Result<()> {
        let schema = SchemaDocument::parse(concat!(
            "schema { query: RootQuery mutation: RootMutation }\n",
            "type RootQuery { a: Int }\n",
            "type RootMutation { b: Int }\n",
            "type Query { ignored: Int }\n",
        ))?;

        assert_eq!(schema.root_type_name(OperationKind::Query), Some("RootQuery"));
        assert_eq!(schema.root_type_name(OperationKind::Mutation), Some("RootMutation"));
        assert!(schema.root_field_definition(OperationKind::Query, "ignored").is_none());

        Ok(())
    }
}
