//! Derived graph structures: the id-keyed `Dag` arena and the traversals that
//! annotate it (cycle detection and level assignment).

pub mod builder;
pub mod cycles;
pub mod dag;
pub mod levels;

pub use builder::{GraphBuilder, build};
pub use cycles::{CycleDetector, CycleScan, detect_cycles};
pub use dag::{Dag, DagNode, DroppedConnection};
pub use levels::{LevelAssigner, assign_levels};
