use crate::types::TypeAnnotation;

/// An `@param` line: one operation variable with its resolved input type.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableAnnotation {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableAnnotation {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Variable name without the `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
impl std::fmt::Display for VariableAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = self.description
            .as_deref()
            .unwrap_or("missing description")
            .replace('\n', "\n#\t");
        write!(f, "@param {{{}}} {} - {description}", self.type_annotation, self.name)
    }
}

/// An `@input` line: one node in the structure of a variable's input type.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputAnnotation {
    pub(crate) description: Option<String>,
    pub(crate) path: String,
    /// The printed type, or `...` for a truncated subtree.
    pub(crate) type_label: String,
}
impl InputAnnotation {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Dotted path from the variable, with `[]` marking list elements.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn type_label(&self) -> &str {
        self.type_label.as_str()
    }
}
impl std::fmt::Display for InputAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@input {{{}}} {}", self.type_label, self.path)?;
        if let Some(description) = &self.description {
            write!(f, " - {description}")?;
        }
        Ok(())
    }
}

/// An `@property` line: one selected output field.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PropertyAnnotation {
    pub(crate) description: Option<String>,
    pub(crate) path: String,
    pub(crate) type_name: String,
}
impl PropertyAnnotation {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Dotted path of response keys from the operation root.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Named output type with List/NonNull wrappers stripped.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl std::fmt::Display for PropertyAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@property {{{}}} {}", self.type_name, self.path)?;
        if let Some(description) = &self.description {
            write!(f, " - {description}")?;
        }
        Ok(())
    }
}

/// A query document together with its generated documentation header.
///
/// [`Display`](std::fmt::Display) renders the `#`-commented header, a blank
/// line, and then the printed query.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AnnotatedQuery {
    pub(crate) inputs: Vec<InputAnnotation>,
    pub(crate) params: Vec<VariableAnnotation>,
    pub(crate) properties: Vec<PropertyAnnotation>,
    pub(crate) query_text: String,
}
impl AnnotatedQuery {
    /// The comment header lines, without the trailing blank line.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![];
        if !self.params.is_empty() {
            lines.push("#".to_string());
            lines.extend(self.params.iter().map(|param| format!("# {param}")));
        }
        if !self.inputs.is_empty() {
            lines.push("#".to_string());
            lines.push("# @input structure".to_string());
            lines.extend(self.inputs.iter().map(|input| format!("# {input}")));
        }
        lines.push("# @returns {Object}".to_string());
        if !self.properties.is_empty() {
            lines.push("#".to_string());
            lines.extend(self.properties.iter().map(|prop| format!("# {prop}")));
        }
        lines
    }

    pub fn inputs(&self) -> &[InputAnnotation] {
        self.inputs.as_slice()
    }

    pub fn params(&self) -> &[VariableAnnotation] {
        self.params.as_slice()
    }

    pub fn properties(&self) -> &[PropertyAnnotation] {
        self.properties.as_slice()
    }

    /// The query, as printed from its parsed form.
    pub fn query_text(&self) -> &str {
        self.query_text.as_str()
    }
}
impl std::fmt::Display for AnnotatedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\n{}", self.header_lines().join("\n"), self.query_text)
    }
}
