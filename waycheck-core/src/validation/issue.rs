//! Validation issues and the fixes offered with them

use geo::Point;
use serde::Serialize;

use crate::model::{Affix, EntityId, Node, Way};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    DisconnectedWay,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::DisconnectedWay => "disconnected_way",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
        }
    }
}

/// Which connectivity check flagged the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisconnectionReason {
    DisconnectedWay,
    DisconnectedMultipolygon,
    UnreachableNewRoad,
}

/// Editor operation a fix stands for. The host editor dispatches on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FixAction {
    /// Resume drawing `way` from `vertex`
    ContinueDrawing {
        way: EntityId,
        vertex: EntityId,
        affix: Affix,
        /// Where the editor should bring the vertex into view
        location: Point<f64>,
    },
    Delete { entity: EntityId },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fix {
    pub icon: &'static str,
    pub title: &'static str,
    pub entity_ids: Vec<EntityId>,
    pub action: FixAction,
}

impl Fix {
    pub fn continue_from_start(way: &Way, vertex: &Node) -> Self {
        Self::continue_drawing(way, vertex, Affix::Prefix)
    }

    pub fn continue_from_end(way: &Way, vertex: &Node) -> Self {
        Self::continue_drawing(way, vertex, Affix::Suffix)
    }

    fn continue_drawing(way: &Way, vertex: &Node, affix: Affix) -> Self {
        let (icon, title) = match affix {
            Affix::Prefix => ("operation-continue-left", "Continue from start"),
            Affix::Suffix => ("operation-continue", "Continue from end"),
        };
        Self {
            icon,
            title,
            entity_ids: vec![vertex.id.clone()],
            action: FixAction::ContinueDrawing {
                way: way.id.clone(),
                vertex: vertex.id.clone(),
                affix,
                location: vertex.loc,
            },
        }
    }

    pub fn delete(entity: &EntityId) -> Self {
        Self {
            icon: "operation-delete",
            title: "Delete this feature",
            entity_ids: vec![entity.clone()],
            action: FixAction::Delete {
                entity: entity.clone(),
            },
        }
    }
}

/// Advisory finding about one entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub reason: DisconnectionReason,
    pub message: String,
    pub tooltip: String,
    pub entities: Vec<EntityId>,
    pub fixes: Vec<Fix>,
}

impl Issue {
    /// Warning for a disconnected highway. New entities are told they cannot
    /// reach the existing network; persisted ones that they connect to nothing.
    pub fn disconnected_way(
        entity: &EntityId,
        label: &str,
        reason: DisconnectionReason,
        fixes: Vec<Fix>,
    ) -> Self {
        let (message, tooltip) = if entity.is_new() {
            (
                format!("{label} is unreachable from the existing road network."),
                "New roads and paths should connect to the existing road network or a building entrance.",
            )
        } else {
            (
                format!("{label} is disconnected from other roads and paths."),
                "Roads and paths should connect to other roads, paths or building entrances.",
            )
        };

        Self {
            kind: IssueKind::DisconnectedWay,
            severity: Severity::Warning,
            reason,
            message,
            tooltip: tooltip.to_owned(),
            entities: vec![entity.clone()],
            fixes,
        }
    }

    /// Id of the entity the issue is about
    pub fn entity(&self) -> Option<&EntityId> {
        self.entities.first()
    }
}
