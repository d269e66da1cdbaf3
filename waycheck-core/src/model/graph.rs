//! Read-only entity graph and its in-memory implementation

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use itertools::Itertools;

use super::entity::{EntityId, EntityKind, EntityRef, Node, Relation, Way};
use crate::Error;

/// Query interface the connectivity checks run against
///
/// Parent and member links are expected to be symmetric; implementations are
/// trusted on that and nothing re-verifies it. Unknown ids resolve to `None`
/// or to empty parent lists.
pub trait GraphQuery {
    fn node(&self, id: &EntityId) -> Option<&Node>;

    fn way(&self, id: &EntityId) -> Option<&Way>;

    fn relation(&self, id: &EntityId) -> Option<&Relation>;

    /// Ids of the ways listing the node as a member, without duplicates
    fn parent_way_ids(&self, node: &EntityId) -> &[EntityId];

    /// Ids of the relations listing the entity as a member, without duplicates
    fn parent_relation_ids(&self, entity: &EntityId) -> &[EntityId];

    /// All entities of the graph, in no particular order
    fn entities(&self) -> Box<dyn Iterator<Item = EntityRef<'_>> + '_>;

    fn entity(&self, id: &EntityId) -> Option<EntityRef<'_>> {
        match id.kind()? {
            EntityKind::Node => self.node(id).map(EntityRef::Node),
            EntityKind::Way => self.way(id).map(EntityRef::Way),
            EntityKind::Relation => self.relation(id).map(EntityRef::Relation),
        }
    }

    fn parent_ways(&self, node: &Node) -> Vec<&Way> {
        self.parent_way_ids(&node.id)
            .iter()
            .filter_map(|id| self.way(id))
            .collect()
    }

    fn parent_multipolygons(&self, way: &Way) -> Vec<&Relation> {
        self.parent_relation_ids(&way.id)
            .iter()
            .filter_map(|id| self.relation(id))
            .filter(|relation| self.is_multipolygon(relation))
            .collect()
    }

    /// Member nodes in way order. Ids which no longer resolve are skipped.
    fn child_nodes(&self, way: &Way) -> Vec<&Node> {
        way.nodes.iter().filter_map(|id| self.node(id)).collect()
    }

    fn is_closed(&self, way: &Way) -> bool {
        way.is_closed()
    }

    fn is_multipolygon(&self, relation: &Relation) -> bool {
        relation.is_multipolygon()
    }
}

/// Immutable in-memory snapshot of the map with parent indices
#[derive(Debug, Clone, Default)]
pub struct MapGraph {
    nodes: HashMap<EntityId, Node>,
    ways: HashMap<EntityId, Way>,
    relations: HashMap<EntityId, Relation>,
    /// node -> ways containing it
    parent_ways: HashMap<EntityId, Vec<EntityId>>,
    /// entity -> relations containing it
    parent_relations: HashMap<EntityId, Vec<EntityId>>,
}

impl MapGraph {
    pub fn builder() -> MapGraphBuilder {
        MapGraphBuilder::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}

impl GraphQuery for MapGraph {
    fn node(&self, id: &EntityId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn way(&self, id: &EntityId) -> Option<&Way> {
        self.ways.get(id)
    }

    fn relation(&self, id: &EntityId) -> Option<&Relation> {
        self.relations.get(id)
    }

    fn parent_way_ids(&self, node: &EntityId) -> &[EntityId] {
        self.parent_ways
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn parent_relation_ids(&self, entity: &EntityId) -> &[EntityId] {
        self.parent_relations
            .get(entity)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn entities(&self) -> Box<dyn Iterator<Item = EntityRef<'_>> + '_> {
        Box::new(
            self.nodes
                .values()
                .map(EntityRef::Node)
                .chain(self.ways.values().map(EntityRef::Way))
                .chain(self.relations.values().map(EntityRef::Relation)),
        )
    }
}

/// Collects entities and derives the parent indices of a [`MapGraph`]
#[derive(Debug, Default)]
pub struct MapGraphBuilder {
    nodes: HashMap<EntityId, Node>,
    ways: HashMap<EntityId, Way>,
    relations: HashMap<EntityId, Relation>,
}

impl MapGraphBuilder {
    /// # Errors
    ///
    /// Returns an error if a node with the same id was already added
    pub fn add_node(&mut self, node: Node) -> Result<(), Error> {
        insert_unique(&mut self.nodes, node.id.clone(), node)
    }

    /// # Errors
    ///
    /// Returns an error if a way with the same id was already added
    pub fn add_way(&mut self, way: Way) -> Result<(), Error> {
        insert_unique(&mut self.ways, way.id.clone(), way)
    }

    /// # Errors
    ///
    /// Returns an error if a relation with the same id was already added
    pub fn add_relation(&mut self, relation: Relation) -> Result<(), Error> {
        insert_unique(&mut self.relations, relation.id.clone(), relation)
    }

    /// Builds the graph. References to entities that were never added are
    /// kept in the indices and simply fail to resolve.
    pub fn build(self) -> MapGraph {
        let mut parent_ways: HashMap<EntityId, Vec<EntityId>> = HashMap::new();
        for way in self.ways.values() {
            // Closed ways list their first node twice
            for node in way.nodes.iter().unique() {
                parent_ways
                    .entry(node.clone())
                    .or_default()
                    .push(way.id.clone());
            }
        }

        let mut parent_relations: HashMap<EntityId, Vec<EntityId>> = HashMap::new();
        for relation in self.relations.values() {
            for member in relation.members.iter().map(|m| &m.id).unique() {
                parent_relations
                    .entry(member.clone())
                    .or_default()
                    .push(relation.id.clone());
            }
        }

        // Stable order regardless of hash iteration order
        parent_ways.values_mut().for_each(|ids| ids.sort_unstable());
        parent_relations.values_mut().for_each(|ids| ids.sort_unstable());

        MapGraph {
            nodes: self.nodes,
            ways: self.ways,
            relations: self.relations,
            parent_ways,
            parent_relations,
        }
    }
}

fn insert_unique<T>(
    entities: &mut HashMap<EntityId, T>,
    id: EntityId,
    entity: T,
) -> Result<(), Error> {
    match entities.entry(id) {
        Entry::Occupied(entry) => Err(Error::InvalidData(format!(
            "Duplicate entity id: {}",
            entry.key()
        ))),
        Entry::Vacant(entry) => {
            entry.insert(entity);
            Ok(())
        }
    }
}
