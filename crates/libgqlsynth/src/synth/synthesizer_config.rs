use std::collections::BTreeSet;

/// What [`QuerySynthesizer`](crate::synth::QuerySynthesizer) does when a
/// requested type cannot be reached from the types before it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreachableTargetPolicy {
    /// Log a warning and leave the type out of the query.
    BestEffort,
    /// Fail with [`QuerySynthesisError::TargetUnreachable`](crate::synth::QuerySynthesisError::TargetUnreachable).
    #[default]
    Strict,
}

/// Settings for a [`QuerySynthesizer`](crate::synth::QuerySynthesizer).
///
/// Every field is optional when deserializing; missing fields take their
/// [`Default`] value.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesizerConfig {
    /// Field names that are never traversed nor selected (e.g. audit fields
    /// such as `createdby`).
    pub disabled_fields: BTreeSet<String>,

    /// Spread the root type's Large fragment in the root selection.
    pub include_root_large_fragment: bool,

    /// Suffix that marks the preferred list root field of a type.
    pub page_field_suffix: String,

    /// Root field arguments that drive pagination. When any of them is
    /// present on a page root field the query gets a hint comment on how to
    /// page through results.
    pub pagination_arguments: Vec<String>,

    /// Suffix that marks the preferred single-entity root field of a type.
    pub single_field_suffix: String,

    pub unreachable_target_policy: UnreachableTargetPolicy,
}
impl SynthesizerConfig {
    pub fn with_disabled_fields<S: Into<String>>(
        mut self,
        disabled_fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.disabled_fields = disabled_fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_unreachable_target_policy(mut self, policy: UnreachableTargetPolicy) -> Self {
        self.unreachable_target_policy = policy;
        self
    }
}
impl std::default::Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            disabled_fields: BTreeSet::new(),
            include_root_large_fragment: true,
            page_field_suffix: "Page".to_string(),
            pagination_arguments: vec!["skip".to_string(), "limit".to_string()],
            single_field_suffix: "ById".to_string(),
            unreachable_target_policy: UnreachableTargetPolicy::default(),
        }
    }
}
