use serde::Deserialize;

use crate::model::{EntityId, Member, Tags};

/// Entities of a map snapshot as stored on disk
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Snapshot {
    pub nodes: Vec<RawNode>,
    pub ways: Vec<RawWay>,
    pub relations: Vec<RawRelation>,
}

#[derive(Debug, Deserialize)]
pub struct RawNode {
    pub id: EntityId,
    /// `[lon, lat]`
    pub loc: [f64; 2],
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Deserialize)]
pub struct RawWay {
    pub id: EntityId,
    pub nodes: Vec<EntityId>,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Deserialize)]
pub struct RawRelation {
    pub id: EntityId,
    pub members: Vec<Member>,
    #[serde(default)]
    pub tags: Tags,
}
