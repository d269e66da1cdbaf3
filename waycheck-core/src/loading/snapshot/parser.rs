use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use geo::Point;

use super::raw_types::Snapshot;
use crate::model::{EntityId, EntityKind, MapGraph, Node, Relation, Way};
use crate::Error;

/// Reads a snapshot from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed
pub fn read_snapshot(path: &Path) -> Result<Snapshot, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Builds the map graph of a snapshot
///
/// # Errors
///
/// Returns an error if an id is duplicated or does not name the kind of the
/// list it appears in
pub fn graph_from_snapshot(snapshot: Snapshot) -> Result<MapGraph, Error> {
    let mut builder = MapGraph::builder();

    for raw in snapshot.nodes {
        check_kind(&raw.id, EntityKind::Node)?;
        let [lon, lat] = raw.loc;
        builder.add_node(Node {
            id: raw.id,
            tags: raw.tags,
            loc: Point::new(lon, lat),
        })?;
    }

    for raw in snapshot.ways {
        check_kind(&raw.id, EntityKind::Way)?;
        builder.add_way(Way {
            id: raw.id,
            tags: raw.tags,
            nodes: raw.nodes,
        })?;
    }

    for raw in snapshot.relations {
        check_kind(&raw.id, EntityKind::Relation)?;
        builder.add_relation(Relation {
            id: raw.id,
            tags: raw.tags,
            members: raw.members,
        })?;
    }

    Ok(builder.build())
}

fn check_kind(id: &EntityId, expected: EntityKind) -> Result<(), Error> {
    if id.kind() == Some(expected) {
        Ok(())
    } else {
        Err(Error::InvalidData(format!(
            "Id '{id}' listed among {expected}s does not start with '{}'",
            expected.id_prefix()
        )))
    }
}
