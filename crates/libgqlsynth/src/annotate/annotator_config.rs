/// Settings for a [`QueryAnnotator`](crate::annotate::QueryAnnotator).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotatorConfig {
    /// Emit `@input` lines describing the structure of every variable's
    /// input type.
    pub describe_inputs: bool,

    /// How many levels of nested input types `@input` lines descend into
    /// before truncating.
    pub input_max_depth: usize,
}
impl std::default::Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            describe_inputs: false,
            input_max_depth: 1,
        }
    }
}
