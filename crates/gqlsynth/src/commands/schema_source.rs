use anyhow::Context;
use libgqlsynth::schema::SchemaDocument;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Where to load the schema from.
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct SchemaSourceArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more SDL files or directories containing SDL \
             files which together make up the schema.",
        long="schema",
        num_args=1..,
        required=true,
        short='s',
    )]
    pub(crate) schema_paths: Vec<PathBuf>,
}
impl SchemaSourceArgs {
    /// Find every schema file at or under the `--schema` paths.
    ///
    /// A single explicitly named file is always used, even when its
    /// extension is not one of `--graphql-file-exts`.
    pub(crate) fn discover_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!("Scanning {} schema paths...", self.schema_paths.len());
        let mut file_paths = vec![];
        for path in &self.schema_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(||
                    format!("Failed to scan schema files at/under {path:?}")
                )?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:?}.");
                    continue;
                }
                let matches_ext = entry_path.extension()
                    .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
                if matches_ext {
                    log::trace!("Found schema file at {entry_path:?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        if file_paths.is_empty()
            && self.schema_paths.len() == 1
            && let Some(first_path) = self.schema_paths.first()
            && first_path.is_file() {
            log::warn!(
                "Loading {first_path:?} as a schema even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.join(", "),
            );
            file_paths.push(first_path.to_owned());
        }

        if file_paths.is_empty() {
            anyhow::bail!(
                "No schema files found under {:?}.",
                self.schema_paths,
            );
        }
        log::debug!("Found {} schema files.", file_paths.len());
        Ok(file_paths)
    }

    pub(crate) fn load(&self) -> anyhow::Result<SchemaDocument> {
        let file_paths = self.discover_files()?;
        let schema = SchemaDocument::from_files(&file_paths)
            .context("Failed to load the schema")?;
        log::info!(
            "Loaded {} type definitions from {} files.",
            schema.type_definitions().count(),
            file_paths.len(),
        );
        Ok(schema)
    }
}
