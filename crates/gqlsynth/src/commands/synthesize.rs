use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::SchemaSourceArgs;
use crate::ConfigFile;
use crate::commands::disabled_field_set;
use anyhow::Context;
use libgqlsynth::annotate::QueryAnnotator;
use libgqlsynth::synth::QuerySynthesizer;
use libgqlsynth::synth::SynthesizerConfig;
use libgqlsynth::synth::UnreachableTargetPolicy;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SynthesizeCmd {
    #[arg(
        help="Prefix the query with its @param/@property documentation header.",
        long,
    )]
    annotate: bool,

    #[arg(
        help="Leave out types that cannot be reached instead of failing.",
        long,
    )]
    best_effort: bool,

    #[arg(
        help="TOML file with `[synthesizer]` and `[annotator]` settings. \
              Flags override it.",
        long,
        short='c',
    )]
    config: Option<PathBuf>,

    #[arg(
        help="With --annotate, also describe the structure of input variables.",
        long,
        requires="annotate",
    )]
    describe_inputs: bool,

    #[arg(
        help="Field names that are never traversed nor selected, in addition \
              to any the config file disables.",
        long,
        value_delimiter = ',',
    )]
    disabled_fields: Vec<String>,

    #[arg(
        help="Do not spread the root type's Large fragment.",
        long,
    )]
    no_large_fragment: bool,

    #[arg(
        help="Read one entity through its single-entity root field (e.g. \
             `userById`) instead of a page through its list root field.",
        long,
    )]
    scalar: bool,

    #[command(flatten)]
    schema: SchemaSourceArgs,

    #[arg(
        help="Ordered type names to read, root type first.",
        long,
        required=true,
        short='t',
        value_delimiter = ',',
    )]
    types: Vec<String>,
}
impl SynthesizeCmd {
    pub(crate) fn synthesizer_config(&self, base: SynthesizerConfig) -> SynthesizerConfig {
        let mut config = base;
        config.disabled_fields.extend(disabled_field_set(&self.disabled_fields));
        if self.no_large_fragment {
            config.include_root_large_fragment = false;
        }
        if self.best_effort {
            config = config.with_unreachable_target_policy(UnreachableTargetPolicy::BestEffort);
        }
        config
    }

    async fn synthesize(&self) -> anyhow::Result<String> {
        let config_file = ConfigFile::load(self.config.as_deref()).await?;
        let schema = self.schema.load()?;
        let synth = QuerySynthesizer::new(
            &schema,
            self.synthesizer_config(config_file.synthesizer),
        )?;

        let result =
            if self.scalar {
                synth.build_scalar_query(&self.types)
            } else {
                synth.build_vector_query(&self.types)
            };
        let query = result.with_context(||
            format!("Failed to synthesize a query for {:?}", self.types)
        )?;
        log::info!(
            "Synthesized `{}` with fragments {:?}.",
            query.operation_name(),
            query.fragment_names(),
        );

        if !self.annotate {
            return Ok(query.into_text());
        }
        let mut annotator_config = config_file.annotator;
        annotator_config.describe_inputs |= self.describe_inputs;
        let annotator = QueryAnnotator::new(&schema, annotator_config);
        Ok(annotator.annotate(query.text())?.to_string())
    }
}

#[inherent::inherent]
impl RunnableCommand for SynthesizeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.synthesize().await {
            Ok(text) => CommandResult::stdout(format_args!("{text}")),
            Err(err) => CommandResult::failure(&err),
        }
    }
}
