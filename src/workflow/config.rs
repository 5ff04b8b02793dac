use serde::de::IntoDeserializer;
use serde::de::value::{Error as NameError, StrDeserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The structural role of a node.
///
/// Only `Start` and `End` carry meaning for the graph engine (cardinality rules).
/// The remaining kinds are opaque to every graph algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    #[serde(alias = "START")]
    Start,
    #[serde(alias = "END")]
    End,
    #[serde(alias = "PROCESS")]
    Process,
    #[serde(alias = "DECISION")]
    Decision,
    #[serde(alias = "CONDITION")]
    Condition,
    #[serde(alias = "PARALLEL")]
    Parallel,
    #[serde(alias = "MERGE")]
    Merge,
    #[serde(alias = "CHAT_NOTIFICATION", alias = "chat-notification")]
    ChatNotification,
    #[serde(alias = "CI_TRIGGER", alias = "ci-trigger")]
    CiTrigger,
    #[serde(alias = "DELAY")]
    Delay,
}

impl NodeKind {
    pub const ALL: [NodeKind; 10] = [
        NodeKind::Start,
        NodeKind::End,
        NodeKind::Process,
        NodeKind::Decision,
        NodeKind::Condition,
        NodeKind::Parallel,
        NodeKind::Merge,
        NodeKind::ChatNotification,
        NodeKind::CiTrigger,
        NodeKind::Delay,
    ];

    /// Kinds that call out to an external system when executed.
    pub fn is_integration(&self) -> bool {
        matches!(
            self,
            NodeKind::ChatNotification | NodeKind::CiTrigger | NodeKind::Delay
        )
    }

    /// Parses the wire name of a kind (`"ci_trigger"`, `"START"`, `"ci-trigger"`).
    /// Accepts exactly the names the JSON loader accepts for a node's `type`.
    pub fn from_name(name: &str) -> Option<Self> {
        let deserializer: StrDeserializer<'_, NameError> = name.into_deserializer();
        NodeKind::deserialize(deserializer).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::End => "end",
            NodeKind::Process => "process",
            NodeKind::Decision => "decision",
            NodeKind::Condition => "condition",
            NodeKind::Parallel => "parallel",
            NodeKind::Merge => "merge",
            NodeKind::ChatNotification => "chat_notification",
            NodeKind::CiTrigger => "ci_trigger",
            NodeKind::Delay => "delay",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an executor should do when a node fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStrategy {
    #[default]
    Stop,
    Continue,
    Retry,
}

/// Execution knobs shared by every node that performs work.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExecutionPolicy {
    pub retry_count: Option<u32>,
    pub timeout_ms: Option<u64>,
    pub on_error: Option<ErrorStrategy>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessConfig {
    pub description: Option<String>,
    pub policy: ExecutionPolicy,
}

/// Shared by `decision` and `condition` nodes. Each entry names an output handle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BranchConfig {
    pub branches: Vec<String>,
    pub default_branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallelConfig {
    pub branches: Vec<String>,
    pub max_concurrency: Option<u32>,
}

/// How a merge node joins its incoming branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    #[default]
    WaitAll,
    FirstCompleted,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeConfig {
    pub strategy: MergeStrategy,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatNotificationConfig {
    pub channel: String,
    pub message: String,
    pub policy: ExecutionPolicy,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CiTriggerConfig {
    pub pipeline: String,
    pub branch: Option<String>,
    pub policy: ExecutionPolicy,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DelayConfig {
    pub duration_ms: u64,
}

/// Per-kind node payload. The `type` tag doubles as the node's `NodeKind`,
/// so a node can never carry a configuration shape that belongs to another kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeConfig {
    #[serde(alias = "START")]
    Start,
    #[serde(alias = "END")]
    End,
    #[serde(alias = "PROCESS")]
    Process(ProcessConfig),
    #[serde(alias = "DECISION")]
    Decision(BranchConfig),
    #[serde(alias = "CONDITION")]
    Condition(BranchConfig),
    #[serde(alias = "PARALLEL")]
    Parallel(ParallelConfig),
    #[serde(alias = "MERGE")]
    Merge(MergeConfig),
    #[serde(alias = "CHAT_NOTIFICATION", alias = "chat-notification")]
    ChatNotification(ChatNotificationConfig),
    #[serde(alias = "CI_TRIGGER", alias = "ci-trigger")]
    CiTrigger(CiTriggerConfig),
    #[serde(alias = "DELAY")]
    Delay(DelayConfig),
}

impl NodeConfig {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeConfig::Start => NodeKind::Start,
            NodeConfig::End => NodeKind::End,
            NodeConfig::Process(_) => NodeKind::Process,
            NodeConfig::Decision(_) => NodeKind::Decision,
            NodeConfig::Condition(_) => NodeKind::Condition,
            NodeConfig::Parallel(_) => NodeKind::Parallel,
            NodeConfig::Merge(_) => NodeKind::Merge,
            NodeConfig::ChatNotification(_) => NodeKind::ChatNotification,
            NodeConfig::CiTrigger(_) => NodeKind::CiTrigger,
            NodeConfig::Delay(_) => NodeKind::Delay,
        }
    }

    /// The execution policy of nodes that perform work, if any.
    pub fn policy(&self) -> Option<&ExecutionPolicy> {
        match self {
            NodeConfig::Process(c) => Some(&c.policy),
            NodeConfig::ChatNotification(c) => Some(&c.policy),
            NodeConfig::CiTrigger(c) => Some(&c.policy),
            _ => None,
        }
    }
}

impl From<NodeKind> for NodeConfig {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Start => NodeConfig::Start,
            NodeKind::End => NodeConfig::End,
            NodeKind::Process => NodeConfig::Process(ProcessConfig::default()),
            NodeKind::Decision => NodeConfig::Decision(BranchConfig::default()),
            NodeKind::Condition => NodeConfig::Condition(BranchConfig::default()),
            NodeKind::Parallel => NodeConfig::Parallel(ParallelConfig::default()),
            NodeKind::Merge => NodeConfig::Merge(MergeConfig::default()),
            NodeKind::ChatNotification => {
                NodeConfig::ChatNotification(ChatNotificationConfig::default())
            }
            NodeKind::CiTrigger => NodeConfig::CiTrigger(CiTriggerConfig::default()),
            NodeKind::Delay => NodeConfig::Delay(DelayConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name_accepts_wire_variants() {
        assert_eq!(NodeKind::from_name("START"), Some(NodeKind::Start));
        assert_eq!(NodeKind::from_name("ci-trigger"), Some(NodeKind::CiTrigger));
        assert_eq!(
            NodeKind::from_name("chat_notification"),
            Some(NodeKind::ChatNotification)
        );
        assert_eq!(NodeKind::from_name("teleport"), None);
    }

    #[test]
    fn test_kind_names_agree_with_node_loader() {
        let names = [
            "start",
            "START",
            "Start",
            "chat_notification",
            "CHAT_NOTIFICATION",
            "chat-notification",
            "ci-trigger",
            "CI_TRIGGER",
            "ci trigger",
            "teleport",
        ];
        for name in names {
            let loaded: Option<NodeConfig> =
                serde_json::from_value(serde_json::json!({ "type": name })).ok();
            assert_eq!(
                NodeKind::from_name(name),
                loaded.map(|config| config.kind()),
                "kind name '{name}'"
            );
        }
        assert_eq!(NodeKind::from_name("Start"), None);
    }

    #[test]
    fn test_integration_kinds() {
        let integrations: Vec<_> = NodeKind::ALL
            .into_iter()
            .filter(NodeKind::is_integration)
            .collect();
        assert_eq!(
            integrations,
            vec![NodeKind::ChatNotification, NodeKind::CiTrigger, NodeKind::Delay]
        );
    }

    #[test]
    fn test_default_config_matches_kind() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeConfig::from(kind).kind(), kind);
        }
    }

    #[test]
    fn test_policy_only_on_working_nodes() {
        assert!(NodeConfig::from(NodeKind::Process).policy().is_some());
        assert!(NodeConfig::from(NodeKind::CiTrigger).policy().is_some());
        assert!(NodeConfig::from(NodeKind::Merge).policy().is_none());
        assert!(NodeConfig::Start.policy().is_none());
    }
}
