use std::collections::HashSet;

use crate::models::{Dependency, Evaluation, Finding, FindingReason};

/// Compatibility policy for one target license.
///
/// Holds the allow list (licenses known to be compatible with `target`) and
/// the deny list (licenses known to be incompatible). Equality is exact
/// string match on the identifier; no expression parsing is attempted.
#[derive(Debug)]
pub struct CompatPolicy {
    /// The license everything is checked against.
    pub target: String,
    /// Identifiers treated as compatible.
    pub compatible: HashSet<String>,
    /// Identifiers treated as explicitly incompatible. Checked before the
    /// allow list, so an identifier present in both sets is incompatible.
    pub incompatible: HashSet<String>,
}

impl Default for CompatPolicy {
    /// Built-in policy: LGPLv3 as the target.
    ///
    /// The allow list covers the permissive and (L)GPL-family licenses the
    /// project has cleared, plus the custom wxWindows license.
    fn default() -> Self {
        let compatible = [
            "LGPL-3.0",
            "LGPL-2.1",
            "GPL-3.0",
            "GPL-2.0",
            "MIT",
            "BSD-2-Clause",
            "BSD-3-Clause",
            "Apache-2.0",
            "MPL-2.0",
            "Zlib",
            "ISC",
            "Unlicense",
            "CC0-1.0",
            "wxWindows",
            "WTFPL",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let incompatible = [
            "GPL-1.0",
            "AGPL-1.0",
            "CDDL-1.0",
            "EPL-1.0",
            "EPL-2.0",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        CompatPolicy {
            target: "LGPLv3".to_string(),
            compatible,
            incompatible,
        }
    }
}

impl CompatPolicy {
    /// Classify every dependency, in declaration order.
    ///
    /// Pure: no I/O, cannot fail. Deny-list membership is checked first;
    /// anything not on the allow list is flagged as unknown.
    pub fn evaluate(&self, deps: &[Dependency]) -> Evaluation {
        let mut findings = Vec::new();

        for dep in deps {
            let reason = if self.incompatible.contains(&dep.license) {
                Some(FindingReason::Incompatible)
            } else if !self.compatible.contains(&dep.license) {
                Some(FindingReason::Unknown)
            } else {
                None
            };

            if let Some(reason) = reason {
                findings.push(Finding {
                    name: dep.name.clone(),
                    license: dep.license.clone(),
                    reason,
                });
            }
        }

        let all_compatible = findings.is_empty();
        Evaluation {
            findings,
            all_compatible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project;

    fn dep(name: &str, license: &str) -> Dependency {
        Dependency {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            license: license.to_string(),
            usage: "static linking".to_string(),
        }
    }

    #[test]
    fn test_default_dependency_set_is_compatible() {
        let policy = CompatPolicy::default();
        let result = policy.evaluate(&project::dependencies());
        assert!(result.all_compatible);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_deny_listed_license_is_incompatible() {
        let policy = CompatPolicy::default();
        let result = policy.evaluate(&[dep("yaml-cpp", "GPL-1.0")]);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].reason, FindingReason::Incompatible);
        assert!(!result.all_compatible);
    }

    #[test]
    fn test_unlisted_license_is_unknown() {
        let policy = CompatPolicy::default();
        let result = policy.evaluate(&[dep("googletest", "ZZZ-Custom")]);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].reason, FindingReason::Unknown);
    }

    #[test]
    fn test_deny_list_takes_precedence_over_allow_list() {
        let mut policy = CompatPolicy::default();
        // Construction error on purpose: same id on both lists.
        policy.compatible.insert("EPL-2.0".to_string());
        assert!(policy.incompatible.contains("EPL-2.0"));

        let result = policy.evaluate(&[dep("eclipse-thing", "EPL-2.0")]);
        assert_eq!(result.findings[0].reason, FindingReason::Incompatible);
    }

    #[test]
    fn test_findings_follow_dependency_order() {
        let policy = CompatPolicy::default();
        let deps = vec![
            dep("a", "GPL-1.0"),
            dep("b", "MIT"),
            dep("c", "ZZZ-Custom"),
            dep("d", "AGPL-1.0"),
        ];

        let result = policy.evaluate(&deps);
        let flagged: Vec<&str> = result.findings.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(flagged, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_finding_count_matches_non_allow_listed_deps() {
        let policy = CompatPolicy::default();
        let deps = vec![dep("x", "MIT"), dep("y", "EPL-1.0"), dep("z", "Custom")];
        let result = policy.evaluate(&deps);
        let expected = deps
            .iter()
            .filter(|d| !policy.compatible.contains(&d.license))
            .count();
        assert_eq!(result.findings.len(), expected);
    }
}
