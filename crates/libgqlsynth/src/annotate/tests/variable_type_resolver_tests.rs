use crate::annotate::QueryContext;
use crate::annotate::resolve_variable_types;
use crate::ast;
use crate::schema::SchemaDocument;
use crate::test::fixtures;

fn resolve(query: &str) -> Vec<(String, String)> {
    let schema = SchemaDocument::parse(fixtures::UNIVERSITY_SDL).unwrap();
    let document = ast::operation::parse(query).unwrap();
    let context = QueryContext::new(&document);
    resolve_variable_types(&schema, &context)
        .into_iter()
        .map(|(name, annot)| (name, annot.to_string()))
        .collect()
}

fn pair(name: &str, type_str: &str) -> (String, String) {
    (name.to_string(), type_str.to_string())
}

#[test]
fn top_level_argument() {
    assert_eq!(
        resolve("query ($id: ID) { userById(id: $id) { id } }"),
        vec![pair("id", "UUID!")],
    );
}

#[test]
fn arguments_on_nested_fields_and_fragments() {
    let resolved = resolve("
        query ($f: StrFilter, $l: Int) {
          userPage { ...U }
          groupPage { memberships(limit: $l) { id } }
        }
        fragment U on UserGQLModel { events(where: $f) { id } }
    ");

    assert_eq!(resolved, vec![pair("f", "StrFilter"), pair("l", "Int!")]);
}

#[test]
fn list_literal_against_non_list_type_is_ignored() {
    assert_eq!(resolve("query ($x: String) { userPage(where: { name: [$x] }) { id } }"), vec![]);
}

#[test]
fn unknown_fields_and_arguments_are_ignored() {
    assert_eq!(
        resolve("query ($x: Int) { nope(a: $x) { id } userPage(bogus: $x) { id } }"),
        vec![],
    );
}
