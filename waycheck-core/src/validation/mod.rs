//! Connectivity analysis of highways and the issues it produces

mod context;
mod disconnected;
mod highway;
mod issue;
mod reachability;
mod validator;

pub use context::{
    AllowDelete, DeleteGuard, LabelFormatter, ProtectRelationMembers, TagLabeler,
    ValidationContext,
};
pub use disconnected::{is_disconnected_multipolygon, is_disconnected_way, vertex_is_disconnected};
pub use highway::{HighwayKind, UnknownHighwayKind, highway_kind, is_highway};
pub use issue::{DisconnectionReason, Fix, FixAction, Issue, IssueKind, Severity};
pub use reachability::{SearchOutcome, is_new_road_unreachable, search_existing_network};
pub use validator::{validate, validate_all, validate_id};
