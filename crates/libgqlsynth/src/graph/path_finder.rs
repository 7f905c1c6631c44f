use crate::graph::TypeGraph;
use crate::graph::TypeGraphEdge;
use crate::graph::TypePath;
use crate::graph::TypePathStep;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

/// Breadth-first search for the shortest field path from `source` to `target`.
///
/// Each type is visited at most once and the first edge that reaches `target`
/// ends the search. Edges are explored in field declaration order, so among
/// equally short paths the one through earlier-declared fields wins.
///
/// An unreachable `target` yields an empty [`TypePath`]; it is up to the
/// caller to decide whether that is an error. When `source == target` the
/// search looks for a cycle back to `source`.
///
/// All working state is local to the call.
pub fn shortest_path(graph: &TypeGraph, source: &str, target: &str) -> TypePath {
    let mut visited = HashSet::<&str>::from([source]);
    let mut predecessors = HashMap::<&str, (&str, &TypeGraphEdge)>::new();
    let mut queue = VecDeque::<&str>::from([source]);

    while let Some(current) = queue.pop_front() {
        for edge in graph.edges_from(current) {
            let next = edge.target_type();
            if next == target {
                let mut steps = path_to(&predecessors, current);
                steps.push(TypePathStep::new(edge.field_name(), next));
                tracing::trace!(
                    "Found path `{source}` -> `{target}` with {} steps.",
                    steps.len(),
                );
                return TypePath::new(steps);
            }
            if visited.insert(next) {
                predecessors.insert(next, (current, edge));
                queue.push_back(next);
            }
        }
    }

    tracing::trace!("No path from `{source}` to `{target}`.");
    TypePath::default()
}

fn path_to<'a>(
    predecessors: &HashMap<&'a str, (&'a str, &'a TypeGraphEdge)>,
    end: &'a str,
) -> Vec<TypePathStep> {
    let mut steps = vec![];
    let mut current = end;
    while let Some((prev, edge)) = predecessors.get(current) {
        steps.push(TypePathStep::new(edge.field_name(), edge.target_type()));
        current = *prev;
    }
    steps.reverse();
    steps
}
