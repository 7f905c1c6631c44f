use crate::annotate::AnnotatedQuery;
use crate::annotate::AnnotationError;
use crate::annotate::AnnotatorConfig;
use crate::annotate::FieldDescriptionIndex;
use crate::annotate::QueryContext;
use crate::annotate::VariableAnnotation;
use crate::annotate::describe_input_type;
use crate::annotate::resolve_output_fields;
use crate::annotate::resolve_variable_types;
use crate::ast;
use crate::schema::SchemaDocument;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, AnnotationError>;

/// Annotate `query_text` against `schema` with the default
/// [`AnnotatorConfig`].
pub fn annotate(schema: &SchemaDocument, query_text: &str) -> Result<AnnotatedQuery> {
    QueryAnnotator::new(schema, AnnotatorConfig::default()).annotate(query_text)
}

/// Documents query documents against a schema.
///
/// Variable and field types are resolved through the schema's type system,
/// so the header reflects what the schema declares even where the query's
/// own variable annotations are looser.
#[derive(Clone, Debug)]
pub struct QueryAnnotator<'schema> {
    config: AnnotatorConfig,
    field_descriptions: FieldDescriptionIndex,
    schema: &'schema SchemaDocument,
}
impl<'schema> QueryAnnotator<'schema> {
    pub fn new(schema: &'schema SchemaDocument, config: AnnotatorConfig) -> Self {
        let field_descriptions = FieldDescriptionIndex::build(schema);
        tracing::debug!("Indexed {} output fields.", field_descriptions.len());
        Self {
            config,
            field_descriptions,
            schema,
        }
    }

    pub fn annotate(&self, query_text: &str) -> Result<AnnotatedQuery> {
        let document = ast::operation::parse(query_text)
            .map_err(|err| AnnotationError::QuerySyntaxError(err.to_string()))?;
        let context = QueryContext::new(&document);

        let resolved_types = resolve_variable_types(self.schema, &context);
        let mut params = vec![];
        for op in context.operations() {
            for var_def in op.variable_definitions {
                let resolved = resolved_types.get(&var_def.name);
                let description = resolved.and_then(|annot|
                    self.schema.description_of(annot.innermost_type_name())
                );
                let type_annotation = resolved
                    .cloned()
                    .unwrap_or_else(|| TypeAnnotation::from_ast_type(&var_def.var_type));
                params.push(VariableAnnotation {
                    description: description.map(str::to_string),
                    name: var_def.name.to_owned(),
                    type_annotation,
                });
            }
        }

        let inputs =
            if self.config.describe_inputs {
                params.iter()
                    .flat_map(|param| describe_input_type(
                        self.schema,
                        param.name(),
                        param.type_annotation(),
                        self.config.input_max_depth,
                    ))
                    .collect()
            } else {
                vec![]
            };

        let properties = resolve_output_fields(
            self.schema,
            &self.field_descriptions,
            &context,
        );

        tracing::debug!(
            "Annotated query with {} params, {} input lines and {} properties.",
            params.len(),
            inputs.len(),
            properties.len(),
        );

        Ok(AnnotatedQuery {
            inputs,
            params,
            properties,
            query_text: document.to_string(),
        })
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    pub fn field_descriptions(&self) -> &FieldDescriptionIndex {
        &self.field_descriptions
    }
}
