mod path_finder;
mod type_graph;
mod type_path;

pub use path_finder::shortest_path;
pub use type_graph::TypeGraph;
pub use type_graph::TypeGraphBuildError;
pub use type_graph::TypeGraphEdge;
pub use type_graph::has_required_arguments;
pub use type_graph::unwrap_named_type;
pub use type_path::TypePath;
pub use type_path::TypePathStep;
