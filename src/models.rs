use serde::{Deserialize, Serialize};

/// One bundled third-party component and how the project links against it.
///
/// `usage` is informational only; it never influences the compatibility
/// verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    pub license: String,
    pub usage: String,
}

/// Why a dependency was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FindingReason {
    /// License is on the deny list.
    Incompatible,
    /// License is on neither list; compatibility cannot be assumed.
    Unknown,
}

impl std::fmt::Display for FindingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingReason::Incompatible => write!(f, "Incompatible license"),
            FindingReason::Unknown => write!(f, "Unknown license compatibility"),
        }
    }
}

/// A flagged dependency: not allow-listed for the target license.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub name: String,
    pub license: String,
    pub reason: FindingReason,
}

/// Result of one evaluation pass over the dependency set.
#[derive(Debug, Serialize, Deserialize)]
pub struct Evaluation {
    pub findings: Vec<Finding>,
    pub all_compatible: bool,
}
