mod annotate;
mod path;
mod schema_source;
mod synthesize;

use crate::Cli;
use crate::CommandResult;
use annotate::AnnotateCmd;
use path::PathCmd;
pub(crate) use schema_source::SchemaSourceArgs;
use synthesize::SynthesizeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlsynth")]
pub(crate) enum CommandEnum {
    /// Annotate an existing query document with schema-derived `@param`,
    /// `@input` and `@property` comments.
    Annotate(Box<AnnotateCmd>),

    /// Print the shortest field path between two types.
    Path(Box<PathCmd>),

    /// Build a query that reads a root type and a chain of related types.
    Synthesize(Box<SynthesizeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Annotate(cmd) => cmd.run(cli).await,
            Self::Path(cmd) => cmd.run(cli).await,
            Self::Synthesize(cmd) => cmd.run(cli).await,
        }
    }
}

/// Split comma-delimited field names into the disabled-field set.
pub(crate) fn disabled_field_set(fields: &[String]) -> std::collections::BTreeSet<String> {
    fields.iter()
        .map(|field| field.trim())
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}
