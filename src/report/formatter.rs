use crate::analysis::{ImpactReport, TopologicalOrder, ValidationResult};
use itertools::Itertools;

/// Formats analysis results into human-readable text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Renders a validation result as a status line followed by one line per finding.
    pub fn format_validation(result: &ValidationResult) -> String {
        let mut lines = vec![if result.is_valid {
            "Workflow is valid".to_string()
        } else {
            format!("Workflow is invalid ({} error(s))", result.errors.len())
        }];

        lines.extend(result.errors.iter().map(|e| format!("  error: {}", e)));
        lines.extend(result.warnings.iter().map(|w| format!("  warning: {}", w)));
        lines.extend(
            result
                .cycles
                .iter()
                .map(|cycle| format!("  cycle: {}", Self::format_cycle(cycle))),
        );
        lines.join("\n")
    }

    /// Renders the linear order and one line per level.
    pub fn format_order(order: &TopologicalOrder) -> String {
        let mut lines = vec![format!("Order: {}", order.nodes.iter().join(" -> "))];
        lines.extend(
            order
                .levels
                .iter()
                .enumerate()
                .map(|(level, ids)| format!("  level {}: {}", level, ids.iter().join(", "))),
        );
        lines.join("\n")
    }

    pub fn format_impact(node_id: &str, report: &ImpactReport) -> String {
        let critical = if report.critical_path {
            ", critical path"
        } else {
            ""
        };
        if report.affected.is_empty() {
            return format!(
                "'{}' affects no other node ({}{})",
                node_id, report.impact_level, critical
            );
        }
        format!(
            "'{}' affects {} node(s) ({}{}): {}",
            node_id,
            report.affected.len(),
            report.impact_level,
            critical,
            report.affected.iter().join(", ")
        )
    }

    /// A cycle is shown closed: `a -> b -> a`.
    fn format_cycle(cycle: &[String]) -> String {
        match cycle.first() {
            Some(first) => cycle.iter().chain(std::iter::once(first)).join(" -> "),
            None => String::new(),
        }
    }
}
