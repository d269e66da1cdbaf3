//! Data model of the editable map
//!
//! Contains the entity types and the read-only graph they are queried through.

pub mod entity;
pub mod graph;

pub use entity::{Affix, EntityId, EntityKind, EntityRef, Member, Node, Relation, Tags, Way};
pub use graph::{GraphQuery, MapGraph, MapGraphBuilder};
