use crate::annotate::AnnotationError;
use crate::annotate::AnnotatorConfig;
use crate::annotate::FieldDescriptionIndex;
use crate::annotate::QueryAnnotator;
use crate::annotate::annotate;
use crate::ast;
use crate::schema::SchemaDocument;
use crate::schema::type_definition_name;
use crate::synth::QuerySynthesizer;
use crate::synth::SynthesizerConfig;
use crate::test::fixtures;
use crate::types::GraphQLTypeKind;

fn university() -> SchemaDocument {
    SchemaDocument::parse(fixtures::UNIVERSITY_SDL).unwrap()
}

fn property_lines(query: &str) -> Vec<String> {
    let schema = university();
    annotate(&schema, query).unwrap()
        .properties()
        .iter()
        .map(|prop| prop.to_string())
        .collect()
}

#[test]
fn param_uses_declared_argument_type_and_property_uses_field_type() {
    let schema = university();

    let annotated = annotate(
        &schema,
        "query userPage($where: UserInputWhereFilter) { userPage(where: $where) { id name } }",
    ).unwrap();

    assert_eq!(annotated.header_lines(), vec![
        "#",
        "# @param {UserInputWhereFilter} where - Where filter for users",
        "# @returns {Object}",
        "#",
        "# @property {UserGQLModel} userPage",
        "# @property {ID} userPage.id - Entity primary key",
        "# @property {String} userPage.name - Given name",
    ]);
    assert_eq!(
        annotated.to_string(),
        format!("{}\n\n{}", annotated.header_lines().join("\n"), annotated.query_text()),
    );
}

#[test]
fn printed_query_is_canonical_and_stable() {
    let schema = university();
    let input = "query userPage($where: UserInputWhereFilter)
        { userPage(where: $where) { id ...U } }
        fragment U on UserGQLModel { name memberships { group { name } } }";

    let annotated = annotate(&schema, input).unwrap();
    let canonical = ast::operation::parse(input).unwrap().to_string();
    let reprinted = ast::operation::parse(annotated.query_text()).unwrap().to_string();

    assert_eq!(annotated.query_text(), canonical);
    assert_eq!(reprinted, canonical);
    assert!(annotated.to_string().ends_with(canonical.as_str()));
}

#[test]
fn variables_nested_in_object_literals_get_the_input_field_type() {
    let schema = university();

    let annotated = annotate(&schema, r#"
        query ($role: String, $f: StrFilter, $inner: UserInputWhereFilter) {
          userPage(where: { role: $role, name: $f, _and: [$inner] }) { id }
        }
    "#).unwrap();
    let params = annotated.params()
        .iter()
        .map(|param| param.to_string())
        .collect::<Vec<_>>();

    assert_eq!(params, vec![
        "@param {RoleKind} role - missing description",
        "@param {StrFilter} f - Filter over string values",
        "@param {UserInputWhereFilter!} inner - Where filter for users",
    ]);
}

#[test]
fn unused_variable_keeps_its_declared_type() {
    let schema = university();

    let annotated = annotate(&schema, "query ($n: [Int!]) { eventPage { id } }").unwrap();

    assert_eq!(
        annotated.params()[0].to_string(),
        "@param {[Int!]} n - The `Int` scalar type represents non-fractional signed \
        whole numeric values. Int can represent values between -(2^31) and 2^31 - 1.",
    );
}

#[test]
fn fragments_narrow_the_current_type() {
    let lines = property_lines("
        query { groupPage { ...G } }
        fragment G on GroupGQLModel { id name mastergroup { name } }
    ");

    assert_eq!(lines, vec![
        "@property {GroupGQLModel} groupPage",
        "@property {ID} groupPage.id",
        "@property {String} groupPage.name - Group name",
        "@property {GroupGQLModel} groupPage.mastergroup",
        "@property {String} groupPage.mastergroup.name - Group name",
    ]);
}

#[test]
fn selections_under_a_union_are_skipped() {
    let lines = property_lines(r#"
        { search(text: "ada") { __typename ... on UserGQLModel { surname } } }
    "#);

    assert_eq!(lines, vec![
        "@property {SearchResult} search",
        "@property {String} search.surname - Family name",
    ]);
}

#[test]
fn aliases_name_the_path_and_duplicates_collapse() {
    let lines = property_lines("{ people: userPage { first: name first: name email } }");

    assert_eq!(lines, vec![
        "@property {UserGQLModel} people",
        "@property {String} people.first - Given name",
        "@property {String} people.email",
    ]);
}

#[test]
fn cyclic_fragment_spreads_terminate() {
    let lines = property_lines("
        { groupPage { ...A } }
        fragment A on GroupGQLModel { subgroups { ...A } }
    ");

    assert_eq!(lines, vec![
        "@property {GroupGQLModel} groupPage",
        "@property {GroupGQLModel} groupPage.subgroups",
    ]);
}

#[test]
fn header_without_params_or_properties() {
    let schema = university();

    let annotated = annotate(&schema, "mutation { doSomething }").unwrap();

    assert!(annotated.params().is_empty());
    assert!(annotated.properties().is_empty());
    assert_eq!(annotated.header_lines(), vec!["# @returns {Object}"]);
}

#[test]
fn syntax_error_aborts_annotation() {
    let schema = university();

    let result = annotate(&schema, "query { userPage { id ");

    assert!(matches!(result, Err(AnnotationError::QuerySyntaxError(_))));
}

#[test]
fn input_structure_is_emitted_when_enabled() {
    let schema = university();
    let annotator = QueryAnnotator::new(&schema, AnnotatorConfig {
        describe_inputs: true,
        ..AnnotatorConfig::default()
    });

    let annotated = annotator.annotate(
        "query ($r: RoleKind) { userPage(where: { role: $r }) { id } }",
    ).unwrap();
    let header = annotated.header_lines();

    assert_eq!(&header[..5], &[
        "#",
        "# @param {RoleKind} r - missing description",
        "#",
        "# @input structure",
        "# @input {RoleKind} r - enum: STUDENT|TEACHER",
    ]);
    assert_eq!(header[5], "# @returns {Object}");
}

#[test]
fn synthesized_queries_can_be_annotated() {
    let schema = SchemaDocument::parse(fixtures::USER_POST_SDL).unwrap();
    let synth = QuerySynthesizer::new(&schema, SynthesizerConfig::default()).unwrap();
    let query = synth.build_vector_query(&["User", "Post"]).unwrap();

    let annotated = annotate(&schema, query.text()).unwrap();
    let lines = annotated.properties()
        .iter()
        .map(|prop| prop.to_string())
        .collect::<Vec<_>>();

    assert_eq!(annotated.params().len(), 2);
    assert!(
        annotated.params()[0].to_string()
            .starts_with("@param {Int} skip - The `Int` scalar type represents"),
    );
    assert_eq!(annotated.params()[0].description(), GraphQLTypeKind::Int.builtin_description());
    assert_eq!(lines, vec![
        "@property {User} userPage",
        "@property {ID} userPage.id",
        "@property {String} userPage.name",
        "@property {Post} userPage.posts",
        "@property {ID} userPage.posts.id",
        "@property {String} userPage.posts.title",
    ]);
}

#[test]
fn field_description_index_covers_objects_and_interfaces() {
    let schema = university();

    let index = FieldDescriptionIndex::build(&schema);

    assert_eq!(index.description("UserGQLModel", "name"), Some("Given name"));
    assert_eq!(index.description("Entity", "id"), Some("Entity primary key"));
    assert_eq!(index.description("UserGQLModel", "email"), None);
    assert_eq!(index.description("EventGQLModel", "facility"), Some("Where the event takes place"));
    assert!(index.contains("Query", "userPage"));
    assert!(!index.contains("StrFilter", "_eq"));
    let output_field_count = schema.type_definitions()
        .filter_map(|def| schema.fields_of(type_definition_name(def)))
        .map(|fields| fields.len())
        .sum::<usize>();
    assert_eq!(index.len(), output_field_count);
    assert!(FieldDescriptionIndex::build(&SchemaDocument::parse("scalar X").unwrap()).is_empty());
}
