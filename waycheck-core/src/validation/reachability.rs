//! Reachability of the persisted road network from newly drawn roads

use hashbrown::HashSet;
use log::{trace, warn};

use crate::model::{EntityId, GraphQuery, Way};

use super::highway::is_highway;

/// Outcome of a walk from a new road towards the persisted network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// An entrance or a persisted highway was found
    Reached,
    /// Every way reachable through shared nodes was visited
    Exhausted,
    /// The visit limit was hit before the walk finished
    Truncated,
}

/// Whether a new highway can never reach a persisted highway or an entrance
///
/// Persisted ways and non-highways are never flagged. A walk cut short by
/// `search_limit` is not flagged either.
pub fn is_new_road_unreachable<G: GraphQuery + ?Sized>(
    way: &Way,
    graph: &G,
    search_limit: Option<usize>,
) -> bool {
    if !way.id.is_new() || !is_highway(&way.tags) {
        return false;
    }

    match search_existing_network(way, graph, search_limit) {
        SearchOutcome::Reached => false,
        SearchOutcome::Exhausted => true,
        SearchOutcome::Truncated => {
            warn!(
                "Reachability search from {} stopped after visiting {} ways",
                way.id,
                search_limit.unwrap_or_default()
            );
            false
        }
    }
}

/// Position of the walk inside one way
struct Frame<'g> {
    way: &'g Way,
    next_node: usize,
    parents: Vec<&'g Way>,
    next_parent: usize,
}

impl<'g> Frame<'g> {
    fn new(way: &'g Way) -> Self {
        Self {
            way,
            next_node: 0,
            parents: Vec::new(),
            next_parent: 0,
        }
    }
}

/// Depth-first walk over ways joined by shared nodes
///
/// Nodes are taken in way order and parent ways in index order, descending
/// into a parent as soon as it is found. Each way is visited at most once;
/// the start way is visited up front.
pub fn search_existing_network<'g, G: GraphQuery + ?Sized>(
    start: &'g Way,
    graph: &'g G,
    search_limit: Option<usize>,
) -> SearchOutcome {
    let mut visited: HashSet<&'g EntityId> = HashSet::new();
    visited.insert(&start.id);
    let mut stack = vec![Frame::new(start)];

    while let Some(frame) = stack.last_mut() {
        if let Some(&parent) = frame.parents.get(frame.next_parent) {
            frame.next_parent += 1;

            if visited.contains(&parent.id) {
                continue;
            }
            if is_highway(&parent.tags) && !parent.id.is_new() {
                trace!("{} reaches persisted highway {}", start.id, parent.id);
                return SearchOutcome::Reached;
            }

            visited.insert(&parent.id);
            if search_limit.is_some_and(|limit| visited.len() > limit) {
                return SearchOutcome::Truncated;
            }
            stack.push(Frame::new(parent));
            continue;
        }

        let way = frame.way;
        let Some(node_id) = way.nodes.get(frame.next_node) else {
            stack.pop();
            continue;
        };
        frame.next_node += 1;
        frame.next_parent = 0;

        let Some(vertex) = graph.node(node_id) else {
            frame.parents.clear();
            continue;
        };
        if vertex.is_entrance() {
            trace!("{} reaches entrance {}", start.id, vertex.id);
            return SearchOutcome::Reached;
        }
        frame.parents = graph.parent_ways(vertex);
    }

    SearchOutcome::Exhausted
}
