//! This module is responsible for loading map snapshots and validator
//! settings and building the graph the validator runs against.

mod builder;
mod config;
pub mod snapshot;

pub use builder::create_map_graph;
pub use config::ValidatorConfig;
pub use snapshot::{Snapshot, graph_from_snapshot, read_snapshot};
