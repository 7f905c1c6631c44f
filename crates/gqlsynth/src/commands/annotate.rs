use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::ConfigFile;
use crate::commands::SchemaSourceArgs;
use anyhow::Context;
use libgqlsynth::annotate::AnnotatorConfig;
use libgqlsynth::annotate::QueryAnnotator;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct AnnotateCmd {
    #[arg(
        help="TOML file with an `[annotator]` section. Flags override it.",
        long,
        short='c',
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Also describe the structure of input variables.",
        long,
    )]
    describe_inputs: bool,

    #[arg(
        help="How many levels of nested input types to describe (default 1).",
        long,
    )]
    input_max_depth: Option<usize>,

    #[arg(
        help="Path to the query document to annotate.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,

    #[command(flatten)]
    schema: SchemaSourceArgs,
}
impl AnnotateCmd {
    pub(crate) fn annotator_config(&self, base: AnnotatorConfig) -> AnnotatorConfig {
        let mut config = base;
        config.describe_inputs |= self.describe_inputs;
        if let Some(input_max_depth) = self.input_max_depth {
            config.input_max_depth = input_max_depth;
        }
        config
    }

    async fn annotate(&self) -> anyhow::Result<String> {
        let config_file = ConfigFile::load(self.config.as_deref()).await?;
        let schema = self.schema.load()?;
        let query_text = tokio::fs::read_to_string(&self.query_file)
            .await
            .with_context(|| format!("Failed to read {:?}", self.query_file))?;

        let annotator = QueryAnnotator::new(
            &schema,
            self.annotator_config(config_file.annotator),
        );
        let annotated = annotator.annotate(&query_text)
            .with_context(|| format!("Failed to annotate {:?}", self.query_file))?;
        log::info!(
            "Annotated {} params and {} properties.",
            annotated.params().len(),
            annotated.properties().len(),
        );
        Ok(annotated.to_string())
    }
}

#[inherent::inherent]
impl RunnableCommand for AnnotateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.annotate().await {
            Ok(text) => CommandResult::stdout(format_args!("{text}")),
            Err(err) => CommandResult::failure(&err),
        }
    }
}
