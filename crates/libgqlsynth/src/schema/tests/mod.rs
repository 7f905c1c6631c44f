mod root_operation_index_tests;
mod schema_document_tests;
