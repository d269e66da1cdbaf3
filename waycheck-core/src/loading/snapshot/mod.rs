//! JSON map snapshots

mod parser;
mod raw_types;

pub use parser::{graph_from_snapshot, read_snapshot};
pub use raw_types::{RawNode, RawRelation, RawWay, Snapshot};
