//! Topological isolation of ways and multipolygons

use crate::model::{EntityKind, GraphQuery, Node, Relation, Way};

use super::highway::is_highway;

/// Whether `vertex` fails to join `way` to any other part of the network
///
/// A vertex with a single parent way is a loose end. Entrances always
/// connect. Otherwise another parent way must be a highway, or sit in a
/// highway-tagged multipolygon other than `exclude_relation`.
pub fn vertex_is_disconnected<G: GraphQuery + ?Sized>(
    way: &Way,
    vertex: &Node,
    graph: &G,
    exclude_relation: Option<&Relation>,
) -> bool {
    let parents = graph.parent_ways(vertex);

    if parents.len() == 1 {
        return true;
    }

    if vertex.is_entrance() {
        return false;
    }

    !parents
        .iter()
        .filter(|parent| parent.id != way.id)
        .any(|parent| {
            is_highway(&parent.tags)
                || graph.parent_multipolygons(parent).iter().any(|relation| {
                    exclude_relation.is_none_or(|excluded| excluded.id != relation.id)
                        && is_highway(&relation.tags)
                })
        })
}

/// Whether no vertex of the way connects to the network.
/// Holds trivially for a way without resolvable nodes.
pub fn is_disconnected_way<G: GraphQuery + ?Sized>(way: &Way, graph: &G) -> bool {
    graph
        .child_nodes(way)
        .iter()
        .all(|vertex| vertex_is_disconnected(way, vertex, graph, None))
}

/// Whether no vertex of any member way of the multipolygon connects to the
/// network. The relation itself never counts as a connector. Members that are
/// not ways, or no longer resolve, are skipped.
pub fn is_disconnected_multipolygon<G: GraphQuery + ?Sized>(
    relation: &Relation,
    graph: &G,
) -> bool {
    if !graph.is_multipolygon(relation) {
        return false;
    }

    relation
        .members
        .iter()
        .filter(|member| member.kind == EntityKind::Way)
        .filter_map(|member| graph.way(&member.id))
        .all(|way| {
            graph
                .child_nodes(way)
                .iter()
                .all(|vertex| vertex_is_disconnected(way, vertex, graph, Some(relation)))
        })
}
