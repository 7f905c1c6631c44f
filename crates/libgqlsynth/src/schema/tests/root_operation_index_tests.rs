use crate::schema::RootFieldShape;
use crate::schema::RootOperationIndex;
use crate::schema::SchemaDocument;
use crate::schema::SchemaParseError;
use crate::test::fixtures;

type Result<T> = std::result::Result<T, SchemaParseError>;

#[test]
fn page_and_single_fields_are_indexed_by_type() -> Result<()> {
    let schema = SchemaDocument::parse(fixtures::UNIVERSITY_SDL)?;
    let index = RootOperationIndex::build(&schema, "Page", "ById");

    assert_eq!(index.preferred_field(RootFieldShape::Page, "UserGQLModel"), Some("userPage"));
    assert_eq!(index.preferred_field(RootFieldShape::Single, "UserGQLModel"), Some("userById"));
    assert_eq!(index.preferred_field(RootFieldShape::Page, "EventGQLModel"), Some("eventPage"));
    assert_eq!(index.preferred_field(RootFieldShape::Page, "FacilityGQLModel"), None);
    assert_eq!(
        index.preferred_field(RootFieldShape::Single, "FacilityGQLModel"),
        Some("facilityById"),
    );
    assert_eq!(index.preferred_field(RootFieldShape::Page, "SearchResult"), Some("search"));
    assert!(index.fields_for(RootFieldShape::Single, "PostGQLModel").is_empty());

    Ok(())
}

#[test]
fn conventional_names_rank_first() -> Result<()> {
    let schema = SchemaDocument::parse(concat!(
        "type User { id: ID! }\n",
        "type Query {\n",
        "  allUsers: [User]\n",
        "  userPage(skip: Int): [User]\n",
        "  me: User\n",
        "  userByEmail(email: String!): User\n",
        "  user(id: ID!): User\n",
        "}\n",
    ))?;
    let index = RootOperationIndex::build(&schema, "Page", "ByEmail");

    assert_eq!(
        index.fields_for(RootFieldShape::Page, "User"),
        &["userPage".to_string(), "allUsers".to_string()],
    );
    assert_eq!(
        index.fields_for(RootFieldShape::Single, "User"),
        &["user".to_string(), "userByEmail".to_string(), "me".to_string()],
    );

    Ok(())
}

#[test]
fn schema_without_query_type_has_no_root_fields() -> Result<()> {
    let schema = SchemaDocument::parse("type User { id: ID! }")?;
    let index = RootOperationIndex::build(&schema, "Page", "ById");

    assert_eq!(index, RootOperationIndex::default());

    Ok(())
}
