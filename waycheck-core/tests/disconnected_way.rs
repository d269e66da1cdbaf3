use geo::Point;
use serde_json::json;
use waycheck_core::loading::graph_from_snapshot;
use waycheck_core::prelude::*;

fn load(value: serde_json::Value) -> MapGraph {
    graph_from_snapshot(serde_json::from_value(value).unwrap()).unwrap()
}

fn issues_for(graph: &MapGraph, id: &str) -> Vec<Issue> {
    validate_id(&id.into(), &ValidationContext::new(graph))
}

fn isolated_residential() -> MapGraph {
    load(json!({
        "nodes": [
            {"id": "n1", "loc": [0.0, 0.0]},
            {"id": "n2", "loc": [0.001, 0.0]}
        ],
        "ways": [{"id": "w1", "nodes": ["n1", "n2"], "tags": {"highway": "residential"}}]
    }))
}

#[test]
fn isolated_way_gets_continue_and_delete_fixes() {
    let graph = isolated_residential();
    let issues = issues_for(&graph, "w1");

    assert_eq!(issues.len(), 1);
    let issue = &issues[0];
    assert_eq!(issue.kind, IssueKind::DisconnectedWay);
    assert_eq!(issue.severity, Severity::Warning);
    assert_eq!(issue.reason, DisconnectionReason::DisconnectedWay);
    assert_eq!(issue.entities, vec![EntityId::from("w1")]);
    assert_eq!(
        issue.message,
        "Residential is disconnected from other roads and paths."
    );

    let targets: Vec<_> = issue.fixes.iter().map(|f| f.entity_ids.clone()).collect();
    assert_eq!(
        targets,
        vec![
            vec![EntityId::from("n1")],
            vec![EntityId::from("n2")],
            vec![EntityId::from("w1")]
        ]
    );
    assert_eq!(
        issue.fixes[0].action,
        FixAction::ContinueDrawing {
            way: "w1".into(),
            vertex: "n1".into(),
            affix: Affix::Prefix,
            location: Point::new(0.0, 0.0),
        }
    );
    assert_eq!(
        issue.fixes[2].action,
        FixAction::Delete {
            entity: "w1".into()
        }
    );
}

#[test]
fn entrance_on_one_end_only_clears_that_vertex() {
    let graph = load(json!({
        "nodes": [
            {"id": "n1", "loc": [0.0, 0.0], "tags": {"entrance": "yes"}},
            {"id": "n2", "loc": [0.001, 0.0]}
        ],
        "ways": [{"id": "w1", "nodes": ["n1", "n2"], "tags": {"highway": "residential"}}]
    }));
    let w1 = graph.way(&"w1".into()).unwrap();
    // n1 has a single parent, so it is a loose end despite the entrance tag
    assert!(is_disconnected_way(w1, &graph));

    let graph = load(json!({
        "nodes": [
            {"id": "n1", "loc": [0.0, 0.0], "tags": {"entrance": "yes"}},
            {"id": "n2", "loc": [0.001, 0.0]},
            {"id": "n3", "loc": [0.0, 0.001]}
        ],
        "ways": [
            {"id": "w1", "nodes": ["n1", "n2"], "tags": {"highway": "residential"}},
            {"id": "w2", "nodes": ["n1", "n3", "n1"], "tags": {"building": "yes"}}
        ]
    }));
    let w1 = graph.way(&"w1".into()).unwrap();
    let n1 = graph.node(&"n1".into()).unwrap();
    let n2 = graph.node(&"n2".into()).unwrap();
    assert!(!vertex_is_disconnected(w1, n1, &graph, None));
    assert!(vertex_is_disconnected(w1, n2, &graph, None));
    assert!(!is_disconnected_way(w1, &graph));
    assert!(issues_for(&graph, "w1").is_empty());
}

#[test]
fn closed_way_gets_no_continue_fixes() {
    let graph = load(json!({
        "nodes": [
            {"id": "n1", "loc": [0.0, 0.0], "tags": {"noexit": "yes"}},
            {"id": "n2", "loc": [0.001, 0.0]},
            {"id": "n3", "loc": [0.0, 0.001]}
        ],
        "ways": [{"id": "w1", "nodes": ["n1", "n2", "n3", "n1"], "tags": {"highway": "service"}}]
    }));
    let issues = issues_for(&graph, "w1");

    assert_eq!(issues.len(), 1);
    let actions: Vec<_> = issues[0].fixes.iter().map(|f| &f.action).collect();
    assert_eq!(
        actions,
        vec![&FixAction::Delete {
            entity: "w1".into()
        }]
    );
}

#[test]
fn noexit_end_is_not_offered_for_continuation() {
    let graph = load(json!({
        "nodes": [
            {"id": "n1", "loc": [0.0, 0.0]},
            {"id": "n2", "loc": [0.001, 0.0], "tags": {"noexit": "yes"}}
        ],
        "ways": [{"id": "w1", "nodes": ["n1", "n2"], "tags": {"highway": "track"}}]
    }));
    let issues = issues_for(&graph, "w1");

    let titles: Vec<_> = issues[0].fixes.iter().map(|f| f.title).collect();
    assert_eq!(titles, ["Continue from start", "Delete this feature"]);
}

#[test]
fn non_highways_are_never_flagged() {
    let graph = load(json!({
        "nodes": [{"id": "n1", "loc": [0.0, 0.0]}, {"id": "n2", "loc": [0.0, 1.0]}],
        "ways": [{"id": "w1", "nodes": ["n1", "n2"], "tags": {"waterway": "stream"}}]
    }));
    assert!(issues_for(&graph, "w1").is_empty());
    assert!(issues_for(&graph, "w404").is_empty());
}

#[test]
fn new_road_linked_only_to_new_roads_is_unreachable() {
    let graph = load(json!({
        "nodes": [
            {"id": "n-1", "loc": [0.0, 0.0]},
            {"id": "n-2", "loc": [0.001, 0.0]},
            {"id": "n-3", "loc": [0.002, 0.0]}
        ],
        "ways": [
            {"id": "w-1", "nodes": ["n-1", "n-2"], "tags": {"highway": "footway", "name": "Mill Path"}},
            {"id": "w-2", "nodes": ["n-2", "n-3"], "tags": {"highway": "footway"}}
        ]
    }));
    let issues = issues_for(&graph, "w-1");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].reason, DisconnectionReason::UnreachableNewRoad);
    assert_eq!(
        issues[0].message,
        "Mill Path is unreachable from the existing road network."
    );
    assert!(issues[0].tooltip.starts_with("New roads"));
}

#[test]
fn new_road_chain_reaching_persisted_road_is_fine() {
    let graph = load(json!({
        "nodes": [
            {"id": "n-1", "loc": [0.0, 0.0]},
            {"id": "n-2", "loc": [0.001, 0.0]},
            {"id": "n-3", "loc": [0.002, 0.0]},
            {"id": "n4", "loc": [0.003, 0.0]},
            {"id": "n5", "loc": [0.004, 0.0]}
        ],
        "ways": [
            {"id": "w-1", "nodes": ["n-1", "n-2"], "tags": {"highway": "footway"}},
            {"id": "w-2", "nodes": ["n-2", "n-3", "n-1"], "tags": {"highway": "footway"}},
            {"id": "w-3", "nodes": ["n-3", "n4"], "tags": {"highway": "footway"}},
            {"id": "w4", "nodes": ["n4", "n5"], "tags": {"highway": "primary"}}
        ]
    }));
    assert!(issues_for(&graph, "w-1").is_empty());
}

#[test]
fn isolated_highway_multipolygon_is_flagged_without_continue_fixes() {
    let graph = load(json!({
        "nodes": [
            {"id": "n1", "loc": [0.0, 0.0]},
            {"id": "n2", "loc": [0.001, 0.0]},
            {"id": "n3", "loc": [0.0, 0.001]}
        ],
        "ways": [{"id": "w1", "nodes": ["n1", "n2", "n3", "n1"]}],
        "relations": [{
            "id": "r1",
            "members": [{"type": "way", "ref": "w1", "role": "outer"}],
            "tags": {"type": "multipolygon", "highway": "pedestrian", "name": "Market Square"}
        }]
    }));
    let issues = issues_for(&graph, "r1");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].reason, DisconnectionReason::DisconnectedMultipolygon);
    assert_eq!(
        issues[0].fixes,
        vec![Fix::delete(&"r1".into())]
    );
}

#[test]
fn protected_relation_member_loses_delete_fix() {
    let graph = load(json!({
        "nodes": [{"id": "n1", "loc": [0.0, 0.0]}, {"id": "n2", "loc": [0.0, 1.0]}],
        "ways": [{"id": "w1", "nodes": ["n1", "n2"], "tags": {"highway": "path"}}],
        "relations": [{"id": "r1", "members": [{"type": "way", "ref": "w1"}], "tags": {"type": "route"}}]
    }));
    let config = ValidatorConfig {
        protect_relation_members: true,
        ..Default::default()
    };
    let context = ValidationContext::new(&graph).with_config(config);
    let issues = validate_id(&"w1".into(), &context);

    assert!(
        issues[0]
            .fixes
            .iter()
            .all(|fix| !matches!(fix.action, FixAction::Delete { .. }))
    );
}

#[test]
fn validation_is_idempotent() {
    let graph = isolated_residential();
    let context = ValidationContext::new(&graph);
    let first = validate_id(&"w1".into(), &context);
    let second = validate_id(&"w1".into(), &context);
    assert_eq!(first, second);
}

#[test]
fn validate_all_matches_per_entity_results_in_id_order() {
    let graph = load(json!({
        "nodes": [
            {"id": "n1", "loc": [0.0, 0.0]},
            {"id": "n2", "loc": [0.001, 0.0]},
            {"id": "n3", "loc": [0.002, 0.0]},
            {"id": "n4", "loc": [0.003, 0.0]},
            {"id": "n5", "loc": [0.004, 0.0]},
            {"id": "n6", "loc": [0.005, 0.0]}
        ],
        "ways": [
            {"id": "w3", "nodes": ["n1", "n2"], "tags": {"highway": "residential"}},
            {"id": "w1", "nodes": ["n3", "n4"], "tags": {"highway": "service"}},
            {"id": "w2", "nodes": ["n4", "n5"], "tags": {"highway": "service"}},
            {"id": "w4", "nodes": ["n5", "n6"], "tags": {"landuse": "grass"}}
        ]
    }));
    let context = ValidationContext::new(&graph);
    let issues = validate_all(&context);

    let flagged: Vec<_> = issues.iter().filter_map(Issue::entity).collect();
    assert_eq!(flagged, [&EntityId::from("w3")]);

    let expected: Vec<Issue> = ["w1", "w2", "w3", "w4"]
        .iter()
        .flat_map(|id| validate_id(&(*id).into(), &context))
        .collect();
    assert_eq!(issues, expected);
}

fn only_delete(issue: &Issue, id: &str) -> bool {
    issue.fixes == vec![Fix::delete(&id.into())]
}

#[test]
fn way_without_nodes_is_flagged_with_only_delete() {
    let graph = load(json!({
        "ways": [{"id": "w1", "nodes": [], "tags": {"highway": "residential"}}]
    }));
    let issues = issues_for(&graph, "w1");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].reason, DisconnectionReason::DisconnectedWay);
    assert!(only_delete(&issues[0], "w1"));
}

#[test]
fn multipolygon_without_way_members_is_flagged_with_only_delete() {
    let graph = load(json!({
        "nodes": [{"id": "n1", "loc": [0.0, 0.0]}],
        "relations": [{
            "id": "r1",
            "members": [
                {"type": "node", "ref": "n1"},
                {"type": "way", "ref": "w404", "role": "outer"}
            ],
            "tags": {"type": "multipolygon", "highway": "pedestrian"}
        }]
    }));
    let issues = issues_for(&graph, "r1");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].reason, DisconnectionReason::DisconnectedMultipolygon);
    assert!(only_delete(&issues[0], "r1"));
}

struct FixedLabel;

impl LabelFormatter for FixedLabel {
    fn display_label(&self, _entity: EntityRef<'_>) -> String {
        "Unnamed link".to_owned()
    }
}

struct NeverDelete;

impl DeleteGuard for NeverDelete {
    fn can_delete(&self, _entity: EntityRef<'_>, _graph: &dyn GraphQuery) -> bool {
        false
    }
}

#[test]
fn host_labeler_and_delete_guard_shape_the_issue() {
    let graph = isolated_residential();
    let context = ValidationContext::new(&graph)
        .with_labeler(&FixedLabel)
        .with_delete_guard(&NeverDelete);
    let issues = validate_id(&"w1".into(), &context);

    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        "Unnamed link is disconnected from other roads and paths."
    );
    let titles: Vec<_> = issues[0].fixes.iter().map(|f| f.title).collect();
    assert_eq!(titles, ["Continue from start", "Continue from end"]);
}

#[test]
fn host_delete_guard_wins_over_config_in_either_order() {
    let graph = load(json!({
        "nodes": [{"id": "n1", "loc": [0.0, 0.0]}, {"id": "n2", "loc": [0.0, 1.0]}],
        "ways": [{"id": "w1", "nodes": ["n1", "n2"], "tags": {"highway": "path"}}],
        "relations": [{"id": "r1", "members": [{"type": "way", "ref": "w1"}], "tags": {"type": "route"}}]
    }));
    let config = ValidatorConfig {
        protect_relation_members: true,
        ..Default::default()
    };
    let allow_all = AllowDelete;

    let guard_first = ValidationContext::new(&graph)
        .with_delete_guard(&allow_all)
        .with_config(config.clone());
    let config_first = ValidationContext::new(&graph)
        .with_config(config)
        .with_delete_guard(&allow_all);

    for context in [guard_first, config_first] {
        let issues = validate_id(&"w1".into(), &context);
        assert!(
            issues[0]
                .fixes
                .iter()
                .any(|fix| matches!(fix.action, FixAction::Delete { .. }))
        );
    }
}
