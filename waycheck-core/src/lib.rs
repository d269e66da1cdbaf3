//! Connectivity validation for the road and path network of an editable map.
//!
//! The crate answers one question for a highway-tagged way or multipolygon:
//! is it cut off from the rest of the network? Three checks feed the answer:
//!
//! - every vertex of a way is disconnected from other highways,
//! - every vertex of a multipolygon's member ways is disconnected,
//! - a newly drawn road cannot reach any already persisted highway.
//!
//! Offending entities produce a single warning [`Issue`] carrying the fixes an
//! editor can offer (continue drawing from an endpoint, delete the feature).

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod validation;

pub use error::Error;
pub use loading::{ValidatorConfig, create_map_graph};
pub use model::{EntityId, EntityKind, EntityRef, GraphQuery, MapGraph, Node, Relation, Tags, Way};
pub use validation::{Issue, ValidationContext, validate, validate_all, validate_id};

/// Character following the kind letter in the id of an entity that has not
/// been persisted yet (`w-1`, `n-42`).
pub const NEW_ID_SENTINEL: char = '-';
