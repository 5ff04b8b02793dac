pub mod impact;
pub mod readiness;
pub mod topo;
pub mod validator;

pub use impact::{ImpactAnalyzer, ImpactLevel, ImpactReport};
pub use readiness::ReadinessEngine;
pub use topo::{TopologicalOrder, TopologicalSorter};
pub use validator::{ValidationResult, Validator};
