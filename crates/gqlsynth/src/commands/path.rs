use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::SchemaSourceArgs;
use crate::commands::disabled_field_set;
use crate::output_utils;
use libgqlsynth::graph::TypeGraph;

#[derive(Debug, clap::Args)]
pub(crate) struct PathCmd {
    #[arg(
        help="Field names the path may not go through.",
        long,
        value_delimiter = ',',
    )]
    disabled_fields: Vec<String>,

    #[arg(help="Type the path starts from.", long)]
    from: String,

    #[arg(
        help="Also traverse fields that have required arguments. Synthesized \
              queries never do.",
        long,
    )]
    include_argument_fields: bool,

    #[command(flatten)]
    schema: SchemaSourceArgs,

    #[arg(help="Type the path leads to.", long)]
    to: String,
}

impl PathCmd {
    fn build_graph(&self) -> anyhow::Result<TypeGraph> {
        let schema = self.schema.load()?;
        let disabled_fields = disabled_field_set(&self.disabled_fields);
        let graph =
            if self.include_argument_fields {
                TypeGraph::build(&schema, &disabled_fields)?
            } else {
                TypeGraph::build_selectable(&schema, &disabled_fields)?
            };
        log::debug!("Type graph spans {} types.", graph.type_names().count());
        Ok(graph)
    }
}

#[inherent::inherent]
impl RunnableCommand for PathCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graph = match self.build_graph() {
            Ok(graph) => graph,
            Err(err) => return CommandResult::failure(&err),
        };

        let path = graph.shortest_path(&self.from, &self.to);
        if path.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No field path leads from `{}` to `{}`.",
                output_utils::RED_X,
                self.from,
                self.to,
            ));
        }
        CommandResult::stdout(format_args!(
            "{} `{}` -> `{}` in {} steps:\n  {path}",
            output_utils::GREEN_CHECK,
            self.from,
            self.to,
            path.len(),
        ))
    }
}
