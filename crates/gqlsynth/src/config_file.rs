use anyhow::Context;
use libgqlsynth::annotate::AnnotatorConfig;
use libgqlsynth::synth::SynthesizerConfig;
use std::path::Path;

/// Settings read from a `--config` TOML file. Command-line flags are
/// applied on top of these.
///
/// ```toml
/// [synthesizer]
/// disabled_fields = ["createdby", "changedby"]
/// unreachable_target_policy = "best_effort"
///
/// [annotator]
/// describe_inputs = true
/// ```
#[derive(Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub annotator: AnnotatorConfig,
    pub synthesizer: SynthesizerConfig,
}
impl ConfigFile {
    /// Read `path`, or fall back to the defaults when no file was given.
    pub(crate) async fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {path:?}"))?;
        log::debug!("Loaded config from {path:?}: {config:?}");
        Ok(config)
    }

    pub(crate) fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
