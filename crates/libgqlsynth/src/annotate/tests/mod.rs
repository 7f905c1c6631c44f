mod query_annotator_tests;
mod variable_type_resolver_tests;
