use crate::graph::TypeGraph;
use crate::graph::TypePath;
use crate::graph::TypePathStep;
use crate::schema::OperationKind;
use crate::schema::RootFieldShape;
use crate::schema::RootOperationIndex;
use crate::schema::SchemaDocument;
use crate::synth::Fragment;
use crate::synth::FragmentDepth;
use crate::synth::QueryDocument;
use crate::synth::QuerySynthesisError;
use crate::synth::SynthesizerConfig;
use crate::synth::UnreachableTargetPolicy;
use crate::synth::large_fragment;
use crate::synth::medium_fragment;
use crate::types::TypeAnnotation;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, QuerySynthesisError>;

/// Builds complete query documents that read a root type and a chain of
/// related types.
///
/// A synthesizer borrows an immutable [`SchemaDocument`] and derives the
/// [`TypeGraph`] and [`RootOperationIndex`] from it once, at construction.
/// Its graph only holds fields that can be selected without arguments (see
/// [`TypeGraph::build_selectable`]), so a type reachable only through such a
/// field counts as unreachable.
/// Every `build_*` call keeps its working state local, so one instance can
/// serve many threads at the same time.
///
/// Given `types = [root, t1, t2, ...]`, the selection for `t1` follows the
/// shortest field path from `root`, the selection for `t2` extends the path
/// to `t1` by the shortest path from `t1` to `t2`, and so on. When a type is
/// not reachable from its predecessor the search restarts from `root`; a
/// type reachable from neither is handled per
/// [`UnreachableTargetPolicy`].
#[derive(Clone, Debug)]
pub struct QuerySynthesizer<'schema> {
    config: SynthesizerConfig,
    graph: TypeGraph,
    root_operations: RootOperationIndex,
    schema: &'schema SchemaDocument,
}
impl<'schema> QuerySynthesizer<'schema> {
    pub fn new(schema: &'schema SchemaDocument, config: SynthesizerConfig) -> Result<Self> {
        let graph = TypeGraph::build_selectable(schema, &config.disabled_fields)?;
        let root_operations = RootOperationIndex::build(
            schema,
            config.page_field_suffix.as_str(),
            config.single_field_suffix.as_str(),
        );
        Ok(Self {
            config,
            graph,
            root_operations,
            schema,
        })
    }

    /// Build a query that reads a page (list) of `types[0]` through its
    /// list root field, nesting the remaining types under it.
    pub fn build_vector_query<S: AsRef<str>>(&self, types: &[S]) -> Result<QueryDocument> {
        self.build_query(types, RootFieldShape::Page)
    }

    /// Build a query that reads one `types[0]` through its single-entity
    /// root field (typically taking an `$id`), nesting the remaining types
    /// under it.
    pub fn build_scalar_query<S: AsRef<str>>(&self, types: &[S]) -> Result<QueryDocument> {
        self.build_query(types, RootFieldShape::Single)
    }

    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    /// Resolve the selection path of every type after `types[0]`, relative
    /// to `types[0]`. Types skipped under
    /// [`UnreachableTargetPolicy::BestEffort`] are absent from the result.
    pub fn resolve_paths<S: AsRef<str>>(&self, types: &[S]) -> Result<Vec<(String, TypePath)>> {
        let (root, rest) = self.validate_types(types)?;
        self.chain_paths(root, rest)
    }

    pub fn root_operations(&self) -> &RootOperationIndex {
        &self.root_operations
    }

    pub fn schema(&self) -> &'schema SchemaDocument {
        self.schema
    }

    fn build_query<S: AsRef<str>>(
        &self,
        types: &[S],
        shape: RootFieldShape,
    ) -> Result<QueryDocument> {
        let (root, rest) = self.validate_types(types)?;
        let no_root_operation = || QuerySynthesisError::NoRootOperation {
            shape,
            type_name: root.to_string(),
        };
        let root_field_name = self.root_operations
            .preferred_field(shape, root)
            .ok_or_else(no_root_operation)?;
        let root_field = self.schema
            .root_field_definition(OperationKind::Query, root_field_name)
            .ok_or_else(no_root_operation)?;

        let paths = self.chain_paths(root, rest)?;

        let mut selections = IndexSet::<String>::new();
        selections.insert(Fragment::spread_for(root, FragmentDepth::Medium));
        if self.config.include_root_large_fragment {
            selections.insert(Fragment::spread_for(root, FragmentDepth::Large));
        }
        for (_, path) in &paths {
            selections.insert(render_selection(root, path.steps()));
        }

        let mut fragment_types = IndexSet::<&str>::from([root]);
        fragment_types.extend(
            paths.iter()
                .flat_map(|(_, path)| path.steps())
                .map(|step| step.target_type()),
        );
        let mut fragments = fragment_types.iter()
            .map(|type_name|
                medium_fragment(self.schema, type_name, &self.config.disabled_fields)
            )
            .collect::<Result<Vec<Fragment>>>()?;
        if self.config.include_root_large_fragment {
            fragments.push(large_fragment(self.schema, root, &self.config.disabled_fields)?);
        }

        let variable_names = root_field.arguments.iter()
            .map(|arg| arg.name.to_owned())
            .collect::<Vec<_>>();
        let variable_decls = root_field.arguments.iter()
            .map(|arg| format!("${}: {}", arg.name, TypeAnnotation::from_ast_type(&arg.value_type)))
            .collect::<Vec<_>>();
        let call_args = variable_names.iter()
            .map(|name| format!("{name}: ${name}"))
            .collect::<Vec<_>>();

        let mut legend = root_field.arguments.iter()
            .map(|arg| {
                let arg_type = TypeAnnotation::from_ast_type(&arg.value_type);
                match &arg.description {
                    Some(desc) => format!("# ${}: {arg_type} - {}", arg.name, single_line(desc)),
                    None => format!("# ${}: {arg_type}", arg.name),
                }
            })
            .collect::<Vec<_>>();
        if shape == RootFieldShape::Page {
            let paging_vars = self.config.pagination_arguments.iter()
                .filter(|name| variable_names.contains(name))
                .map(|name| format!("${name}"))
                .collect::<Vec<_>>();
            if !paging_vars.is_empty() {
                legend.push("#".to_string());
                legend.push(format!(
                    "# to get more results, adjust {} and repeat the query until it \
                    returns an empty list",
                    paging_vars.join(" and/or "),
                ));
            }
        }

        let mut text = format!("query {root_field_name}");
        if !variable_decls.is_empty() {
            text.push_str(&format!("({})", variable_decls.join(", ")));
        }
        text.push('\n');
        for line in &legend {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("{\n");
        text.push_str(&format!("  {root_field_name}"));
        if !call_args.is_empty() {
            text.push_str(&format!("({})", call_args.join(", ")));
        }
        text.push_str(" {\n");
        for selection in &selections {
            text.push_str(&format!("    {selection}\n"));
        }
        text.push_str("  }\n}\n");
        for fragment in &fragments {
            text.push_str(&format!("\n{fragment}\n"));
        }
        let text = text.trim_end().to_string();

        tracing::debug!(
            "Synthesized `{root_field_name}` query over {} types with {} fragments.",
            paths.len() + 1,
            fragments.len(),
        );

        Ok(QueryDocument {
            fragment_names: fragments.iter().map(Fragment::name).collect(),
            operation_name: root_field_name.to_string(),
            root_field_name: root_field_name.to_string(),
            text,
            variable_names,
        })
    }

    fn chain_paths<'a, S: AsRef<str>>(
        &self,
        root: &'a str,
        rest: &'a [S],
    ) -> Result<Vec<(String, TypePath)>> {
        let mut resolved = vec![];
        let mut anchor_type = root;
        let mut anchor_path = TypePath::default();

        for target in rest {
            let target = target.as_ref();
            let path =
                if target == anchor_type {
                    Some(anchor_path.to_owned())
                } else {
                    self.find_chained_path(root, anchor_type, &anchor_path, target)
                };

            match path {
                Some(path) => {
                    tracing::debug!("Selecting `{target}` via `{root}` -> {path}.");
                    anchor_type = target;
                    anchor_path = path.to_owned();
                    resolved.push((target.to_string(), path));
                },

                None => match self.config.unreachable_target_policy {
                    UnreachableTargetPolicy::BestEffort =>
                        tracing::warn!(
                            "Skipping `{target}`: no field path reaches it from \
                            `{anchor_type}` or `{root}`.",
                        ),
                    UnreachableTargetPolicy::Strict =>
                        return Err(QuerySynthesisError::TargetUnreachable {
                            source_type: anchor_type.to_string(),
                            target_type: target.to_string(),
                        }),
                },
            }
        }

        Ok(resolved)
    }

    fn find_chained_path(
        &self,
        root: &str,
        anchor_type: &str,
        anchor_path: &TypePath,
        target: &str,
    ) -> Option<TypePath> {
        let relative = self.graph.shortest_path(anchor_type, target);
        if !relative.is_empty() {
            return Some(anchor_path.concat(&relative));
        }
        if target == root {
            return Some(TypePath::default());
        }

        tracing::debug!(
            "`{target}` is unreachable from `{anchor_type}`; searching from `{root}`.",
        );
        let from_root = self.graph.shortest_path(root, target);
        (!from_root.is_empty()).then_some(from_root)
    }

    fn validate_types<'a, S: AsRef<str>>(&self, types: &'a [S]) -> Result<(&'a str, &'a [S])> {
        let (root, rest) = types.split_first()
            .ok_or(QuerySynthesisError::NoTypesRequested)?;

        for type_name in types {
            let type_name = type_name.as_ref();
            let kind = self.schema.type_kind(type_name)
                .ok_or_else(|| QuerySynthesisError::TypeNotFound {
                    type_name: type_name.to_string(),
                })?;
            if !kind.is_composite() {
                return Err(QuerySynthesisError::NotAnOutputType {
                    kind,
                    type_name: type_name.to_string(),
                });
            }
        }

        Ok((root.as_ref(), rest))
    }
}

fn render_selection(root: &str, steps: &[TypePathStep]) -> String {
    match steps.split_first() {
        None => Fragment::spread_for(root, FragmentDepth::Medium),
        Some((step, [])) =>
            format!(
                "{} {{ {} }}",
                step.field_name(),
                Fragment::spread_for(step.target_type(), FragmentDepth::Medium),
            ),
        Some((step, rest)) =>
            format!(
                "{} {{ {} {} }}",
                step.field_name(),
                Fragment::spread_for(step.target_type(), FragmentDepth::Medium),
                render_selection(step.target_type(), rest),
            ),
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
