use crate::schema::OperationKind;
use crate::schema::SchemaDocument;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// The two shapes of Query-root entry point a type can be fetched through.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum RootFieldShape {
    /// A root field returning a list of the type (e.g. `userPage(skip, limit)`).
    Page,
    /// A root field returning one instance of the type (e.g. `userById(id)`).
    Single,
}
impl std::fmt::Display for RootFieldShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page => f.write_str("page (list)"),
            Self::Single => f.write_str("single-entity"),
        }
    }
}

/// Index of the Query-root fields through which each type can be read.
///
/// Every Query field whose declared type is a list of `T` is a page
/// candidate for `T`; every Query field whose declared type is `T` itself is
/// a single-entity candidate. Candidates are ranked by naming convention:
/// page fields ending in the configured page suffix come first, and
/// single-entity fields accepting an `id` argument (or ending in the
/// configured single suffix) come first. Ties keep SDL declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RootOperationIndex {
    page_fields: IndexMap<String, Vec<String>>,
    single_fields: IndexMap<String, Vec<String>>,
}
impl RootOperationIndex {
    pub fn build(
        schema: &SchemaDocument,
        page_field_suffix: &str,
        single_field_suffix: &str,
    ) -> Self {
        let mut page_candidates = IndexMap::<String, Vec<(u8, String)>>::new();
        let mut single_candidates = IndexMap::<String, Vec<(u8, String)>>::new();

        for field in schema.root_fields(OperationKind::Query) {
            let annot = TypeAnnotation::from_ast_type(&field.field_type);
            let type_name = annot.innermost_type_name().to_string();
            let field_name = field.name.to_owned();

            if annot.as_list_annotation().is_some() {
                let rank = if field_name.ends_with(page_field_suffix) { 0 } else { 1 };
                page_candidates.entry(type_name)
                    .or_default()
                    .push((rank, field_name));
            } else {
                let takes_id = field.arguments.iter().any(|arg| arg.name == "id");
                let rank =
                    if takes_id {
                        0
                    } else if field_name.ends_with(single_field_suffix) {
                        1
                    } else {
                        2
                    };
                single_candidates.entry(type_name)
                    .or_default()
                    .push((rank, field_name));
            }
        }

        Self {
            page_fields: rank_candidates(page_candidates),
            single_fields: rank_candidates(single_candidates),
        }
    }

    /// Ranked root fields of the requested shape for `type_name`.
    pub fn fields_for(&self, shape: RootFieldShape, type_name: &str) -> &[String] {
        let fields = match shape {
            RootFieldShape::Page => &self.page_fields,
            RootFieldShape::Single => &self.single_fields,
        };
        fields.get(type_name)
            .map(|names| names.as_slice())
            .unwrap_or_default()
    }

    /// The preferred root field of the requested shape for `type_name`.
    pub fn preferred_field(&self, shape: RootFieldShape, type_name: &str) -> Option<&str> {
        self.fields_for(shape, type_name)
            .first()
            .map(|name| name.as_str())
    }
}

fn rank_candidates(
    candidates: IndexMap<String, Vec<(u8, String)>>,
) -> IndexMap<String, Vec<String>> {
    candidates.into_iter()
        .map(|(type_name, mut fields)| {
            // Stable: equal ranks keep declaration order.
            fields.sort_by_key(|(rank, _)| *rank);
            (type_name, fields.into_iter().map(|(_, name)| name).collect())
        })
        .collect()
}
