/// How much of a type a [`Fragment`] selects.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub enum FragmentDepth {
    /// Leaf-valued fields only.
    Medium,
    /// Leaf-valued fields plus every relation field reduced to its
    /// `__typename` and `id`.
    Large,
}
impl std::fmt::Display for FragmentDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Large => f.write_str("Large"),
            Self::Medium => f.write_str("Medium"),
        }
    }
}

/// One line in a [`Fragment`] body.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum FragmentSelection {
    Leaf(String),
    Relation {
        field_name: String,
        sub_selection: Vec<String>,
    },
}
impl FragmentSelection {
    pub fn field_name(&self) -> &str {
        match self {
            Self::Leaf(field_name) => field_name.as_str(),
            Self::Relation { field_name, .. } => field_name.as_str(),
        }
    }
}
impl std::fmt::Display for FragmentSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(field_name) => f.write_str(field_name),
            Self::Relation { field_name, sub_selection } =>
                write!(f, "{field_name} {{ {} }}", sub_selection.join(" ")),
        }
    }
}

/// A named, reusable selection of fields on one type.
///
/// Fragments are pure functions of the schema, the type and the
/// [`FragmentDepth`]; two fragments with the same [`Fragment::name`] always
/// have the same body.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Fragment {
    pub(crate) depth: FragmentDepth,
    pub(crate) selections: Vec<FragmentSelection>,
    pub(crate) type_name: String,
}
impl Fragment {
    pub fn depth(&self) -> FragmentDepth {
        self.depth
    }

    /// `{TypeName}{Depth}Fragment`, e.g. `UserMediumFragment`.
    pub fn name(&self) -> String {
        Self::name_for(self.type_name.as_str(), self.depth)
    }

    pub fn name_for(type_name: &str, depth: FragmentDepth) -> String {
        format!("{type_name}{depth}Fragment")
    }

    pub fn selections(&self) -> &[FragmentSelection] {
        self.selections.as_slice()
    }

    /// The `...Name` spread that pulls this fragment into a selection set.
    pub fn spread(&self) -> String {
        Self::spread_for(self.type_name.as_str(), self.depth)
    }

    pub fn spread_for(type_name: &str, depth: FragmentDepth) -> String {
        format!("...{}", Self::name_for(type_name, depth))
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "fragment {} on {} {{", self.name(), self.type_name)?;
        for selection in &self.selections {
            writeln!(f, "  {selection}")?;
        }
        f.write_str("}")
    }
}
