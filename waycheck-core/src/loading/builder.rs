use std::path::Path;

use log::info;

use super::snapshot::{graph_from_snapshot, read_snapshot};
use crate::{Error, MapGraph};

/// Creates a map graph from a JSON snapshot file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid snapshot, or
/// contains inconsistent entities
pub fn create_map_graph(path: &Path) -> Result<MapGraph, Error> {
    if !path.exists() {
        return Err(Error::InvalidData(format!(
            "Snapshot file not found: {}",
            path.display()
        )));
    }

    info!("Reading map snapshot: {}", path.display());
    let snapshot = read_snapshot(path)?;
    let graph = graph_from_snapshot(snapshot)?;

    info!(
        "Map graph created with {} nodes, {} ways and {} relations",
        graph.node_count(),
        graph.way_count(),
        graph.relation_count()
    );
    Ok(graph)
}
