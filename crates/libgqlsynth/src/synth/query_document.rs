/// A synthesized GraphQL query document.
///
/// The text holds the operation (with a commented argument legend) followed
/// by every fragment it spreads. It is ready to hand to a GraphQL client or
/// to [`QueryAnnotator`](crate::annotate::QueryAnnotator).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct QueryDocument {
    pub(crate) fragment_names: Vec<String>,
    pub(crate) operation_name: String,
    pub(crate) root_field_name: String,
    pub(crate) text: String,
    pub(crate) variable_names: Vec<String>,
}
impl QueryDocument {
    /// Names of the fragments defined by the document, in document order.
    pub fn fragment_names(&self) -> &[String] {
        self.fragment_names.as_slice()
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn operation_name(&self) -> &str {
        self.operation_name.as_str()
    }

    pub fn root_field_name(&self) -> &str {
        self.root_field_name.as_str()
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Declared variable names (without the `$`).
    pub fn variable_names(&self) -> &[String] {
        self.variable_names.as_slice()
    }
}
impl std::fmt::Display for QueryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text.as_str())
    }
}
