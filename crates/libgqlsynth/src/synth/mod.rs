mod fragment;
mod fragment_builder;
mod query_document;
mod query_synthesis_error;
mod query_synthesizer;
mod synthesizer_config;

pub use fragment::Fragment;
pub use fragment::FragmentDepth;
pub use fragment::FragmentSelection;
pub use fragment_builder::large_fragment;
pub use fragment_builder::medium_fragment;
pub use query_document::QueryDocument;
pub use query_synthesis_error::QuerySynthesisError;
pub use query_synthesizer::QuerySynthesizer;
pub use synthesizer_config::SynthesizerConfig;
pub use synthesizer_config::UnreachableTargetPolicy;
