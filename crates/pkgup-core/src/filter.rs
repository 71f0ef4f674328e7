//! Prune an installed dependency tree down to the paths that lead to an
//! in-range copy of the package being upgraded.

use crate::range::VersionRange;
use crate::tree::{Dependencies, DependencyNode};

/// What to look for: a package name and the range of installed versions
/// that should be bumped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCriteria {
    pub package: String,
    pub range: VersionRange,
}

impl UpdateCriteria {
    fn new(package: impl Into<String>, range: VersionRange) -> Self {
        Self {
            package: package.into(),
            range,
        }
    }

    /// Build criteria from the raw answers: `[minimum, target)`.
    pub fn parse(package: &str, minimum: &str, target: &str) -> miette::Result<Self> {
        Ok(Self::new(package, VersionRange::parse(minimum, target)?))
    }

    pub fn is_target(&self, name: &str) -> bool {
        name == self.package
    }

    fn in_range(&self, node: &DependencyNode) -> bool {
        node.version
            .as_deref()
            .is_some_and(|v| self.range.contains(v))
    }
}

/// Filter `node` (known as `name`) depth-first.
///
/// A node survives if it is the target package in range, or if any of its
/// children survive; surviving children keep their listing order. A target
/// node outside the range is dropped together with its subtree. Returns
/// `None` when nothing under `node` needs updating.
pub fn filter_tree(
    node: &DependencyNode,
    name: &str,
    criteria: &UpdateCriteria,
) -> Option<DependencyNode> {
    let is_target = criteria.is_target(name);
    if is_target && !criteria.in_range(node) {
        return None;
    }

    let children: Dependencies = node
        .dependencies
        .iter()
        .filter_map(|(child_name, child)| {
            filter_tree(child, child_name, criteria).map(|kept| (child_name.to_string(), kept))
        })
        .collect();

    if !children.is_empty() || is_target {
        Some(DependencyNode {
            name: node.name.clone(),
            version: node.version.clone(),
            from: node.from.clone(),
            resolved: node.resolved.clone(),
            dependencies: children,
        })
    } else {
        None
    }
}

/// Every path from the root to an occurrence of the target package in a
/// filtered tree, as `name@version` segments.
pub fn target_paths(node: &DependencyNode, name: &str, package: &str) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    collect_paths(node, name, package, &mut path, &mut out);
    out
}

fn collect_paths(
    node: &DependencyNode,
    name: &str,
    package: &str,
    path: &mut Vec<String>,
    out: &mut Vec<Vec<String>>,
) {
    path.push(match node.version {
        Some(ref v) => format!("{name}@{v}"),
        None => name.to_string(),
    });
    if name == package {
        out.push(path.clone());
    }
    for (child_name, child) in node.dependencies.iter() {
        collect_paths(child, child_name, package, path, out);
    }
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(lo: &str, hi: &str) -> UpdateCriteria {
        UpdateCriteria::parse("lodash", lo, hi).unwrap()
    }

    #[test]
    fn root_target_leaf_in_range() {
        let root = DependencyNode::with_version("4.17.4");
        let kept = filter_tree(&root, "lodash", &criteria("4.0.0", "4.17.21")).unwrap();
        assert_eq!(kept, root);
    }

    #[test]
    fn missing_version_is_out_of_range() {
        let root = DependencyNode::default().dependency("lodash", DependencyNode::default());
        assert!(filter_tree(&root, "app", &criteria("0.0.0", "9.0.0")).is_none());
    }

    #[test]
    fn target_with_unmatched_children_becomes_leaf() {
        let lodash = DependencyNode::with_version("4.1.0")
            .dependency("other", DependencyNode::with_version("1.0.0"));
        let kept = filter_tree(&lodash, "lodash", &criteria("4.0.0", "5.0.0")).unwrap();
        assert!(kept.is_leaf());
        assert_eq!(kept.version.as_deref(), Some("4.1.0"));
    }

    #[test]
    fn target_paths_lists_each_occurrence() {
        let root = DependencyNode::default()
            .dependency(
                "a",
                DependencyNode::with_version("1.0.0")
                    .dependency("lodash", DependencyNode::with_version("4.1.0")),
            )
            .dependency("lodash", DependencyNode::with_version("4.2.0"));
        let paths = target_paths(&root, "app", "lodash");
        assert_eq!(
            paths,
            vec![
                vec!["app", "a@1.0.0", "lodash@4.1.0"],
                vec!["app", "lodash@4.2.0"],
            ]
        );
    }
}
