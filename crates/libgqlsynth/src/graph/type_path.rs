/// One hop of a [`TypePath`]: select `field_name` to arrive at `target_type`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypePathStep {
    pub(crate) field_name: String,
    pub(crate) target_type: String,
}
impl TypePathStep {
    pub fn new(field_name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            target_type: target_type.into(),
        }
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn target_type(&self) -> &str {
        self.target_type.as_str()
    }
}

/// An ordered list of field hops through a [`TypeGraph`](crate::graph::TypeGraph).
///
/// An empty path means no connecting relation was found (or that source and
/// target coincide, for chained paths).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypePath {
    steps: Vec<TypePathStep>,
}
impl TypePath {
    pub fn new(steps: Vec<TypePathStep>) -> Self {
        Self { steps }
    }

    /// A new path walking `self` and then `rest`.
    pub fn concat(&self, rest: &TypePath) -> TypePath {
        let mut steps = self.steps.to_owned();
        steps.extend(rest.steps.iter().cloned());
        TypePath { steps }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[TypePathStep] {
        self.steps.as_slice()
    }

    /// The type reached by the last step.
    pub fn target(&self) -> Option<&str> {
        self.steps.last().map(|step| step.target_type())
    }
}
impl std::fmt::Display for TypePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self.steps.iter()
            .map(|step| format!("{}:{}", step.field_name, step.target_type))
            .collect::<Vec<_>>()
            .join(" -> ");
        f.write_str(rendered.as_str())
    }
}
