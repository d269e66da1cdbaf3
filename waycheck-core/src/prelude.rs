pub use crate::NEW_ID_SENTINEL;

// Re-export key components
pub use crate::loading::{Snapshot, ValidatorConfig, create_map_graph, read_snapshot};
pub use crate::model::{GraphQuery, MapGraph, MapGraphBuilder};
pub use crate::validation::{
    AllowDelete, DeleteGuard, DisconnectionReason, Fix, FixAction, Issue, IssueKind,
    LabelFormatter, ProtectRelationMembers, Severity, TagLabeler, ValidationContext, validate,
    validate_all, validate_id,
};

// Entity model
pub use crate::model::{Affix, EntityId, EntityKind, EntityRef, Member, Node, Relation, Tags, Way};

// Connectivity predicates
pub use crate::validation::{
    HighwayKind, UnknownHighwayKind, is_disconnected_multipolygon, is_disconnected_way, is_highway,
    is_new_road_unreachable, vertex_is_disconnected,
};
