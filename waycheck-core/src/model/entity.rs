//! Map entities - nodes, ways and relations

use std::borrow::Borrow;
use std::fmt;

use geo::Point;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::NEW_ID_SENTINEL;

/// Key to value mapping of an entity's tags
pub type Tags = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Node,
    Way,
    Relation,
}

impl EntityKind {
    /// Leading character of ids of this kind
    pub fn id_prefix(self) -> char {
        match self {
            EntityKind::Node => 'n',
            EntityKind::Way => 'w',
            EntityKind::Relation => 'r',
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Node => f.write_str("node"),
            EntityKind::Way => f.write_str("way"),
            EntityKind::Relation => f.write_str("relation"),
        }
    }
}

/// Entity identifier such as `n12`, `w-3` or `r7`
///
/// The first character names the entity kind. Entities which were drawn in
/// the editor and not saved yet have [`NEW_ID_SENTINEL`] right after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> Option<EntityKind> {
        match self.0.chars().next()? {
            'n' => Some(EntityKind::Node),
            'w' => Some(EntityKind::Way),
            'r' => Some(EntityKind::Relation),
            _ => None,
        }
    }

    /// Whether the entity has not been persisted to the backing store yet
    pub fn is_new(&self) -> bool {
        self.0.chars().nth(1) == Some(NEW_ID_SENTINEL)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Map node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: EntityId,
    pub tags: Tags,
    /// Node coordinates (lon, lat)
    pub loc: Point<f64>,
}

impl Node {
    pub fn new(id: impl Into<EntityId>, loc: Point<f64>) -> Self {
        Self {
            id: id.into(),
            tags: Tags::new(),
            loc,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Doors and gates join networks which share no way.
    /// An empty `entrance` value does not count.
    pub fn is_entrance(&self) -> bool {
        matches!(self.tag("entrance"), Some(value) if !value.is_empty() && value != "no")
    }
}

/// Which end of a way drawing resumes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Affix {
    Prefix,
    Suffix,
}

/// Ordered sequence of nodes - a line or a polygon boundary
#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    pub id: EntityId,
    pub tags: Tags,
    pub nodes: Vec<EntityId>,
}

impl Way {
    pub fn new<I, N>(id: impl Into<EntityId>, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<EntityId>,
    {
        Self {
            id: id.into(),
            tags: Tags::new(),
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn first(&self) -> Option<&EntityId> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&EntityId> {
        self.nodes.last()
    }

    pub fn is_closed(&self) -> bool {
        self.nodes.len() > 1 && self.first() == self.last()
    }
}

/// Relation member reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(rename = "ref")]
    pub id: EntityId,
    #[serde(default)]
    pub role: String,
}

impl Member {
    pub fn way(id: impl Into<EntityId>, role: &str) -> Self {
        Self {
            kind: EntityKind::Way,
            id: id.into(),
            role: role.to_owned(),
        }
    }
}

/// Group of members with roles
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub id: EntityId,
    pub tags: Tags,
    pub members: Vec<Member>,
}

impl Relation {
    pub fn new(id: impl Into<EntityId>, members: Vec<Member>) -> Self {
        Self {
            id: id.into(),
            tags: Tags::new(),
            members,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn is_multipolygon(&self) -> bool {
        self.tag("type") == Some("multipolygon")
    }
}

/// Borrowed view of any entity kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'a> {
    Node(&'a Node),
    Way(&'a Way),
    Relation(&'a Relation),
}

impl<'a> EntityRef<'a> {
    pub fn id(&self) -> &'a EntityId {
        match self {
            EntityRef::Node(node) => &node.id,
            EntityRef::Way(way) => &way.id,
            EntityRef::Relation(relation) => &relation.id,
        }
    }

    pub fn tags(&self) -> &'a Tags {
        match self {
            EntityRef::Node(node) => &node.tags,
            EntityRef::Way(way) => &way.tags,
            EntityRef::Relation(relation) => &relation.tags,
        }
    }

    pub fn tag(&self, key: &str) -> Option<&'a str> {
        self.tags().get(key).map(String::as_str)
    }
}
