use crate::ast;
use crate::file_reader;
use crate::schema::OperationKind;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaParseError>;

/// An immutable, parsed GraphQL schema.
///
/// All type definitions are owned here and keyed by name in SDL declaration
/// order. Type extensions (`extend type ...`) are folded into their base
/// definitions while loading, so consumers only ever see one definition per
/// type. A [`SchemaDocument`] is never mutated after construction and may be
/// shared freely between threads.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDocument {
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    subscription_type_name: Option<String>,
    types: IndexMap<String, ast::schema::TypeDefinition>,
}

#[derive(Default)]
struct SchemaSources {
    explicit_roots: Option<ast::schema::SchemaDefinition>,
    extensions: Vec<ast::schema::TypeExtension>,
    str_load_counter: u16,
    types: IndexMap<String, ast::schema::TypeDefinition>,
}

impl SchemaDocument {
    /// Parse a single SDL document.
    pub fn parse(sdl: &str) -> Result<Self> {
        let mut sources = SchemaSources::default();
        sources.load_str(None, sdl)?;
        sources.finish()
    }

    /// Build a schema from an already-parsed SDL document.
    pub fn from_ast(document: ast::schema::Document) -> Result<Self> {
        let mut sources = SchemaSources::default();
        sources.load_ast(PathBuf::from("ast://0"), document)?;
        sources.finish()
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::from_files(&[file_path])
    }

    /// Load and merge several SDL files into one schema. Extensions in any
    /// file may extend types defined in any other file.
    pub fn from_files(file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        let mut sources = SchemaSources::default();
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = file_reader::read_content(file_path)
                .map_err(|err| SchemaParseError::FileReadError(Box::new(err)))?;
            sources.load_str(Some(file_path.to_path_buf()), content.as_str())?;
        }
        sources.finish()
    }

    /// The schema's [`GraphQLTypeKind`] for `type_name`. Built-in scalars are
    /// known even when the SDL does not declare them.
    pub fn type_kind(&self, type_name: &str) -> Option<GraphQLTypeKind> {
        match self.types.get(type_name) {
            Some(def) => Some(def.into()),
            None => GraphQLTypeKind::builtin_scalar(type_name),
        }
    }

    pub fn contains_type(&self, type_name: &str) -> bool {
        self.type_kind(type_name).is_some()
    }

    pub fn type_definition(&self, type_name: &str) -> Option<&ast::schema::TypeDefinition> {
        self.types.get(type_name)
    }

    /// All type definitions, in declaration order.
    pub fn type_definitions(&self) -> impl Iterator<Item = &ast::schema::TypeDefinition> {
        self.types.values()
    }

    /// The SDL description of `type_name`. Built-in scalars without one in
    /// the SDL get their standard description.
    pub fn description_of(&self, type_name: &str) -> Option<&str> {
        use ast::schema::TypeDefinition;
        let declared = self.types.get(type_name).and_then(|def| match def {
            TypeDefinition::Enum(t) => t.description.as_deref(),
            TypeDefinition::InputObject(t) => t.description.as_deref(),
            TypeDefinition::Interface(t) => t.description.as_deref(),
            TypeDefinition::Object(t) => t.description.as_deref(),
            TypeDefinition::Scalar(t) => t.description.as_deref(),
            TypeDefinition::Union(t) => t.description.as_deref(),
        });
        declared.or_else(||
            GraphQLTypeKind::builtin_scalar(type_name)?.builtin_description()
        )
    }

    /// Output fields of an Object or Interface type.
    pub fn fields_of(&self, type_name: &str) -> Option<&[ast::schema::Field]> {
        match self.types.get(type_name)? {
            ast::schema::TypeDefinition::Object(obj) => Some(obj.fields.as_slice()),
            ast::schema::TypeDefinition::Interface(iface) => Some(iface.fields.as_slice()),
            _ => None,
        }
    }

    pub fn field_definition(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&ast::schema::Field> {
        self.fields_of(type_name)?
            .iter()
            .find(|field| field.name == field_name)
    }

    pub fn input_fields(&self, type_name: &str) -> Option<&[ast::schema::InputValue]> {
        match self.types.get(type_name)? {
            ast::schema::TypeDefinition::InputObject(input) => Some(input.fields.as_slice()),
            _ => None,
        }
    }

    pub fn enum_values(&self, type_name: &str) -> Option<&[ast::schema::EnumValue]> {
        match self.types.get(type_name)? {
            ast::schema::TypeDefinition::Enum(enum_type) => Some(enum_type.values.as_slice()),
            _ => None,
        }
    }

    /// Name of the entry type for the given [`OperationKind`], if the schema
    /// defines one.
    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type_name.as_deref(),
            OperationKind::Query => self.query_type_name.as_deref(),
            OperationKind::Subscription => self.subscription_type_name.as_deref(),
        }
    }

    pub fn root_fields(&self, kind: OperationKind) -> &[ast::schema::Field] {
        self.root_type_name(kind)
            .and_then(|type_name| self.fields_of(type_name))
            .unwrap_or_default()
    }

    pub fn root_field_definition(
        &self,
        kind: OperationKind,
        field_name: &str,
    ) -> Option<&ast::schema::Field> {
        self.field_definition(self.root_type_name(kind)?, field_name)
    }
}

impl SchemaSources {
    fn load_str(&mut self, file_path: Option<PathBuf>, content: &str) -> Result<()> {
        let file_path = file_path.unwrap_or_else(|| {
            let ctr = self.str_load_counter;
            self.str_load_counter += 1;
            PathBuf::from(format!("str://{ctr}"))
        });

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaParseError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        self.load_ast(file_path, ast_doc)
    }

    fn load_ast(&mut self, file_path: PathBuf, ast_doc: ast::schema::Document) -> Result<()> {
        for def in ast_doc.definitions {
            match def {
                ast::schema::Definition::SchemaDefinition(schema_def) =>
                    self.explicit_roots = Some(schema_def),

                ast::schema::Definition::TypeDefinition(type_def) => {
                    let type_name = type_definition_name(&type_def).to_string();
                    if self.types.contains_key(&type_name) {
                        return Err(SchemaParseError::DuplicateTypeDefinition {
                            file: file_path,
                            type_name,
                        });
                    }
                    self.types.insert(type_name, type_def);
                },

                ast::schema::Definition::TypeExtension(ext) =>
                    self.extensions.push(ext),

                ast::schema::Definition::DirectiveDefinition(_) => (),
            }
        }

        tracing::debug!(
            "Loaded schema source {file_path:?} ({} types so far).",
            self.types.len(),
        );
        Ok(())
    }

    fn finish(mut self) -> Result<SchemaDocument> {
        for ext in std::mem::take(&mut self.extensions) {
            self.fold_extension(ext)?;
        }

        let root_name = |kind: OperationKind, explicit: Option<&Option<String>>| {
            match explicit {
                Some(name) => name.to_owned(),
                None => {
                    let default_name = kind.default_root_type_name();
                    match self.types.get(default_name) {
                        Some(ast::schema::TypeDefinition::Object(_)) =>
                            Some(default_name.to_string()),
                        _ => None,
                    }
                },
            }
        };
        let explicit = self.explicit_roots.as_ref();
        let query_type_name =
            root_name(OperationKind::Query, explicit.map(|s| &s.query));
        let mutation_type_name =
            root_name(OperationKind::Mutation, explicit.map(|s| &s.mutation));
        let subscription_type_name =
            root_name(OperationKind::Subscription, explicit.map(|s| &s.subscription));

        Ok(SchemaDocument {
            mutation_type_name,
            query_type_name,
            subscription_type_name,
            types: self.types,
        })
    }

    fn fold_extension(&mut self, ext: ast::schema::TypeExtension) -> Result<()> {
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        let ext_type_name = match &ext {
            TypeExtension::Enum(e) => e.name.to_owned(),
            TypeExtension::InputObject(e) => e.name.to_owned(),
            TypeExtension::Interface(e) => e.name.to_owned(),
            TypeExtension::Object(e) => e.name.to_owned(),
            TypeExtension::Scalar(e) => e.name.to_owned(),
            TypeExtension::Union(e) => e.name.to_owned(),
        };
        let undefined = || SchemaParseError::ExtensionOfUndefinedType {
            type_name: ext_type_name.to_owned(),
        };

        let base = self.types.get_mut(&ext_type_name).ok_or_else(undefined)?;
        match (base, ext) {
            (TypeDefinition::Enum(base), TypeExtension::Enum(ext)) =>
                base.values.extend(ext.values),
            (TypeDefinition::InputObject(base), TypeExtension::InputObject(ext)) =>
                base.fields.extend(ext.fields),
            (TypeDefinition::Interface(base), TypeExtension::Interface(ext)) =>
                base.fields.extend(ext.fields),
            (TypeDefinition::Object(base), TypeExtension::Object(ext)) =>
                base.fields.extend(ext.fields),
            (TypeDefinition::Scalar(_), TypeExtension::Scalar(_)) => (),
            (TypeDefinition::Union(base), TypeExtension::Union(ext)) =>
                base.types.extend(ext.types),
            _ => return Err(undefined()),
        }
        Ok(())
    }
}

pub(crate) fn type_definition_name(def: &ast::schema::TypeDefinition) -> &str {
    use ast::schema::TypeDefinition;
    match def {
        TypeDefinition::Enum(t) => t.name.as_str(),
        TypeDefinition::InputObject(t) => t.name.as_str(),
        TypeDefinition::Interface(t) => t.name.as_str(),
        TypeDefinition::Object(t) => t.name.as_str(),
        TypeDefinition::Scalar(t) => t.name.as_str(),
        TypeDefinition::Union(t) => t.name.as_str(),
    }
}

#[derive(Debug, Error)]
pub enum SchemaParseError {
    #[error(
        "The `{type_name}` type is defined more than once (second definition \
        in {file:?})."
    )]
    DuplicateTypeDefinition {
        file: PathBuf,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type, but no type of that name \
        and kind is defined in the schema."
    )]
    ExtensionOfUndefinedType {
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    FileReadError(Box<file_reader::ReadContentError>),

    #[error("Error parsing schema source {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },
}
