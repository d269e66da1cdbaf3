//! Disconnected highway validation

use log::{debug, info};
use rayon::prelude::*;

use crate::model::{EntityId, EntityRef, GraphQuery, Way};

use super::context::ValidationContext;
use super::disconnected::{is_disconnected_multipolygon, is_disconnected_way};
use super::highway::is_highway;
use super::issue::{DisconnectionReason, Fix, Issue};
use super::reachability::is_new_road_unreachable;

/// Validates one entity, returning at most one issue
///
/// Only highway-tagged entities are checked. Ways are tested for isolated
/// vertices, multipolygons for isolated member ways and new ways for
/// reachability of the persisted network, in that order.
pub fn validate<G: GraphQuery>(
    entity: EntityRef<'_>,
    context: &ValidationContext<'_, G>,
) -> Vec<Issue> {
    if !is_highway(entity.tags()) {
        return Vec::new();
    }

    let Some(reason) = disconnection_reason(entity, context) else {
        return Vec::new();
    };
    debug!("{} flagged: {reason:?}", entity.id());

    let graph = context.graph;
    let label = context.labeler.display_label(entity);
    let mut fixes = Vec::new();

    if let EntityRef::Way(way) = entity
        && !graph.is_closed(way)
    {
        fixes.extend(continue_drawing_fixes(way, graph));
    }

    if context.delete_guard().can_delete(entity, graph) {
        fixes.push(Fix::delete(entity.id()));
    }

    vec![Issue::disconnected_way(entity.id(), &label, reason, fixes)]
}

/// Resolves `id` and validates it. Unknown ids yield no issues.
pub fn validate_id<G: GraphQuery>(id: &EntityId, context: &ValidationContext<'_, G>) -> Vec<Issue> {
    match context.graph.entity(id) {
        Some(entity) => validate(entity, context),
        None => {
            debug!("{id} not found in graph, skipping");
            Vec::new()
        }
    }
}

/// Validates every way and relation of the graph in parallel.
/// Issues come back ordered by entity id.
pub fn validate_all<G: GraphQuery + Sync>(context: &ValidationContext<'_, G>) -> Vec<Issue> {
    let candidates: Vec<EntityRef<'_>> = context
        .graph
        .entities()
        .filter(|entity| !matches!(entity, EntityRef::Node(_)))
        .collect();

    let mut issues: Vec<Issue> = candidates
        .par_iter()
        .flat_map_iter(|entity| validate(*entity, context))
        .collect();
    issues.sort_by(|a, b| a.entities.cmp(&b.entities));

    info!(
        "Validated {} ways and relations, {} disconnected",
        candidates.len(),
        issues.len()
    );
    issues
}

fn disconnection_reason<G: GraphQuery>(
    entity: EntityRef<'_>,
    context: &ValidationContext<'_, G>,
) -> Option<DisconnectionReason> {
    let graph = context.graph;
    match entity {
        EntityRef::Way(way) => {
            if is_disconnected_way(way, graph) {
                Some(DisconnectionReason::DisconnectedWay)
            } else if is_new_road_unreachable(way, graph, context.config.search_limit) {
                Some(DisconnectionReason::UnreachableNewRoad)
            } else {
                None
            }
        }
        EntityRef::Relation(relation) => is_disconnected_multipolygon(relation, graph)
            .then_some(DisconnectionReason::DisconnectedMultipolygon),
        EntityRef::Node(_) => None,
    }
}

/// Continue fixes for both ends of an open way, skipping ends tagged
/// `noexit=yes` and ends that no longer resolve
fn continue_drawing_fixes<G: GraphQuery>(way: &Way, graph: &G) -> Vec<Fix> {
    let mut fixes = Vec::with_capacity(2);

    if let Some(first) = way.first().and_then(|id| graph.node(id))
        && first.tag("noexit") != Some("yes")
    {
        fixes.push(Fix::continue_from_start(way, first));
    }
    if let Some(last) = way.last().and_then(|id| graph.node(id))
        && last.tag("noexit") != Some("yes")
    {
        fixes.push(Fix::continue_from_end(way, last));
    }

    fixes
}
